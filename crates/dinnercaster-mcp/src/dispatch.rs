//! Request dispatch shared by the HTTP and stdio transports.
//!
//! Every entry point returns a [`JsonRpcResponse`]; failures are folded into
//! the response's `error` object and never escape.

use serde_json::{Map, Value};

use dinnercaster_core::{Error, ServerInfo, PROTOCOL_VERSION};

use crate::jsonrpc::{default_id, JsonRpcRequest, JsonRpcResponse};
use crate::tools::{value_kind, ToolRegistry};

/// Top-level methods understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Initialize,
    ToolsList,
    ToolsCall,
}

impl Method {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "initialize" => Some(Self::Initialize),
            "tools/list" => Some(Self::ToolsList),
            "tools/call" => Some(Self::ToolsCall),
            _ => None,
        }
    }
}

/// Decode a raw JSON body into a request and dispatch it.
///
/// A body that cannot be decoded still gets a response, carrying its `id`
/// when one can be recovered.
pub fn handle_value(raw: Value) -> JsonRpcResponse {
    let id = raw.get("id").cloned().unwrap_or_else(default_id);

    if !raw.is_object() {
        tracing::warn!(kind = value_kind(&raw), "request body is not an object");
        return JsonRpcResponse::from_result(
            id,
            Err(Error::Internal(format!(
                "request must be a JSON object, got {}",
                value_kind(&raw)
            ))),
        );
    }

    match serde_json::from_value::<JsonRpcRequest>(raw) {
        Ok(req) => handle(&req),
        Err(err) => {
            tracing::warn!(error = %err, "failed to decode request envelope");
            JsonRpcResponse::from_result(id, Err(err.into()))
        }
    }
}

/// Dispatch a decoded request.
pub fn handle(req: &JsonRpcRequest) -> JsonRpcResponse {
    let method = req.method.as_deref().unwrap_or_default();
    tracing::debug!(method, id = %req.id, "dispatching request");

    let result = route(req);
    if let Err(err) = &result {
        tracing::debug!(method, code = err.code(), error = %err, "request failed");
    }

    JsonRpcResponse::from_result(req.id.clone(), result)
}

fn route(req: &JsonRpcRequest) -> Result<Value, Error> {
    let method = req
        .method
        .as_deref()
        .and_then(Method::parse)
        .ok_or(Error::MethodNotFound)?;

    match method {
        Method::Initialize => Ok(initialize()),
        Method::ToolsList => Ok(tools_list()),
        Method::ToolsCall => tools_call(req.params.as_ref()),
    }
}

fn initialize() -> Value {
    serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": ServerInfo::current(),
    })
}

fn tools_list() -> Value {
    serde_json::json!({ "tools": ToolRegistry::definitions() })
}

fn tools_call(params: Option<&Value>) -> Result<Value, Error> {
    let call = CallParams::parse(params)?;

    let name = call.name.as_deref().unwrap_or_default();

    tracing::debug!(tool = name, "invoking tool");
    let text = ToolRegistry::invoke(name, &call.arguments)?.into_text()?;

    Ok(serde_json::json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    }))
}

/// The `params` of a `tools/call` request.
#[derive(Debug, Default)]
struct CallParams {
    name: Option<String>,
    arguments: Map<String, Value>,
}

impl CallParams {
    fn parse(params: Option<&Value>) -> Result<Self, Error> {
        let params = match params {
            None => return Ok(Self::default()),
            Some(Value::Object(params)) => params,
            Some(other) => {
                return Err(Error::Internal(format!(
                    "params must be an object, got {}",
                    value_kind(other)
                )))
            }
        };

        let name = params.get("name").and_then(Value::as_str).map(str::to_owned);

        let arguments = match params.get("arguments") {
            None => Map::new(),
            Some(Value::Object(arguments)) => arguments.clone(),
            Some(other) => {
                return Err(Error::Internal(format!(
                    "arguments must be an object, got {}",
                    value_kind(other)
                )))
            }
        };

        Ok(Self { name, arguments })
    }
}
