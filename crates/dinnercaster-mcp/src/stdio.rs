//! Line-delimited JSON server.
//!
//! One request envelope per input line, one response envelope per output
//! line, in order. Generic over reader and writer so tests can drive it
//! with in-memory buffers.

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::dispatch;
use crate::jsonrpc::{JsonRpcResponse, PARSE_ERROR};

/// Errors that stop the line loop.
#[derive(Debug, thiserror::Error)]
pub enum StdioError {
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),

    #[error("write error: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serves the dispatcher over a pair of byte streams.
pub struct StdioServer<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl StdioServer<tokio::io::Stdin, tokio::io::Stdout> {
    /// Server bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> StdioServer<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Run until the input reaches EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing a response fails.
    /// Malformed input lines are answered, not returned as errors.
    pub async fn run(&mut self) -> Result<(), StdioError> {
        tracing::info!("Serving requests on stdio");

        let mut line = Vec::new();
        loop {
            line.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut line)
                .await
                .map_err(StdioError::Read)?;
            if read == 0 {
                tracing::info!("stdin closed, shutting down");
                return Ok(());
            }

            let message = line.trim_ascii();
            if message.is_empty() {
                continue;
            }

            tracing::trace!(len = message.len(), "read message");
            let response = match serde_json::from_slice::<Value>(message) {
                Ok(raw) => dispatch::handle_value(raw),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to parse request line");
                    JsonRpcResponse::error(Value::Null, PARSE_ERROR, format!("Parse error: {err}"))
                }
            };

            self.write_response(&response).await?;
        }
    }

    async fn write_response(&mut self, response: &JsonRpcResponse) -> Result<(), StdioError> {
        let mut json = serde_json::to_string(response)?;
        json.push('\n');

        self.writer
            .write_all(json.as_bytes())
            .await
            .map_err(StdioError::Write)?;
        self.writer.flush().await.map_err(StdioError::Write)?;
        Ok(())
    }
}
