use axum::Json;
use serde_json::Value;

use dinnercaster_mcp::JsonRpcResponse;

/// Handle a JSON-RPC request.
///
/// Protocol errors are reported inside the envelope with `200 OK`; the body
/// is taken as raw JSON so a malformed envelope still gets a JSON-RPC reply.
pub async fn mcp_request(Json(body): Json<Value>) -> Json<JsonRpcResponse> {
    let response = dinnercaster_mcp::handle_value(body);
    if let Some(err) = &response.error {
        tracing::info!(code = err.code, message = %err.message, "JSON-RPC request failed");
    }
    Json(response)
}
