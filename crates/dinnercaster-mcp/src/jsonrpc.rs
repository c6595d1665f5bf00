use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use dinnercaster_core::Error;

pub use dinnercaster_core::error::{INTERNAL_ERROR, METHOD_NOT_FOUND};

/// Error code for a line that is not valid JSON.
pub const PARSE_ERROR: i32 = -32700;

/// A JSON-RPC 2.0 request.
///
/// Decoding is lenient: a missing `id` becomes `1`, a missing or non-string
/// `method` becomes `None` and matches no handler. An explicit `"params": null`
/// is kept as `Some(Value::Null)`, distinct from absent `params`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default = "default_version")]
    pub jsonrpc: String,
    #[serde(default = "default_id")]
    pub id: Value,
    #[serde(default, deserialize_with = "string_or_none")]
    pub method: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Build a request with the given id, method and params.
    pub fn new(id: Value, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: default_version(),
            id,
            method: Some(method.into()),
            params,
        }
    }
}

/// The id used when a request does not carry one.
pub fn default_id() -> Value {
    Value::from(1)
}

fn default_version() -> String {
    "2.0".to_string()
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A JSON-RPC 2.0 response. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: default_version(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: default_version(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Wrap the outcome of a handler.
    pub fn from_result(id: Value, result: Result<Value, Error>) -> Self {
        match result {
            Ok(value) => Self::success(id, value),
            Err(err) => Self::error(id, err.code(), err.to_string()),
        }
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_request() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/list",
            "params": null
        }"#;
        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method.as_deref(), Some("tools/list"));
        assert_eq!(req.id, serde_json::json!(7));
        assert_eq!(req.params, Some(Value::Null));
    }

    #[test]
    fn absent_params_is_none() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc": "2.0", "id": 1, "method": "tools/list"}"#).unwrap();
        assert!(req.params.is_none());

        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("params"));
    }

    #[test]
    fn missing_id_defaults_to_one() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc": "2.0", "method": "initialize"}"#).unwrap();
        assert_eq!(req.id, serde_json::json!(1));
    }

    #[test]
    fn explicit_null_id_is_kept() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc": "2.0", "id": null, "method": "initialize"}"#)
                .unwrap();
        assert!(req.id.is_null());
    }

    #[test]
    fn non_string_method_is_none() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc": "2.0", "id": 1, "method": 42}"#).unwrap();
        assert!(req.method.is_none());

        let req: JsonRpcRequest = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(req.method.is_none());
        assert_eq!(req.jsonrpc, "2.0");
    }

    #[test]
    fn success_response() {
        let resp = JsonRpcResponse::success(
            serde_json::json!(1),
            serde_json::json!({"tools": []}),
        );
        assert!(resp.error.is_none());
        assert!(resp.result.is_some());

        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("error"));
    }

    #[test]
    fn error_response() {
        let resp = JsonRpcResponse::error(
            serde_json::json!("abc"),
            METHOD_NOT_FOUND,
            "Method not found",
        );
        assert!(resp.result.is_none());

        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("result").is_none());
        assert_eq!(json["id"], "abc");
        assert_eq!(json["error"]["code"], -32601);
        assert_eq!(json["error"]["message"], "Method not found");
        assert!(json["error"].get("data").is_none());
    }

    #[test]
    fn from_result_maps_error_code() {
        let resp = JsonRpcResponse::from_result(
            serde_json::json!(3),
            Err(Error::Internal("boom".to_string())),
        );
        let err = resp.error.unwrap();
        assert_eq!(err.code, INTERNAL_ERROR);
        assert_eq!(err.message, "Internal error: boom");
    }

    #[test]
    fn request_with_params() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": "abc",
            "method": "tools/call",
            "params": {
                "name": "echo",
                "arguments": {
                    "text": "hello"
                }
            }
        }"#;
        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method.as_deref(), Some("tools/call"));

        let params = req.params.unwrap();
        assert_eq!(params["name"], "echo");
        assert_eq!(params["arguments"]["text"], "hello");
    }
}
