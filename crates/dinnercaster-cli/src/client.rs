use reqwest::Client;
use serde_json::Value;

use dinnercaster_mcp::{JsonRpcRequest, JsonRpcResponse};

/// Id sent with every request; the CLI issues one request per run.
const REQUEST_ID: u64 = 1;

/// Minimal JSON-RPC client for a running Dinnercaster3 server.
pub struct RpcClient {
    client: Client,
    endpoint: String,
}

impl RpcClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/mcp", base_url.trim_end_matches('/')),
        }
    }

    /// Send one request and decode the response envelope.
    pub async fn call(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> anyhow::Result<JsonRpcResponse> {
        let request = JsonRpcRequest::new(Value::from(REQUEST_ID), method, params);
        tracing::debug!(method, endpoint = %self.endpoint, "sending request");

        let resp = self.client.post(&self.endpoint).json(&request).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await?;
            anyhow::bail!("Request failed ({status}): {body}");
        }

        let response: JsonRpcResponse = resp.json().await?;
        if response.id != request.id {
            tracing::warn!(sent = %request.id, received = %response.id, "response id mismatch");
        }
        Ok(response)
    }
}
