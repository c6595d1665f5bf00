/// JSON-RPC error code for an unknown method or tool.
pub const METHOD_NOT_FOUND: i32 = -32601;

/// JSON-RPC error code for any failure while handling a request.
pub const INTERNAL_ERROR: i32 = -32603;

/// Errors surfaced by the request dispatcher.
///
/// The `Display` output is the exact `message` placed in the JSON-RPC error
/// object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Unknown top-level method, or unknown tool under `tools/call`.
    #[error("Method not found")]
    MethodNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// The JSON-RPC error code for this error.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::MethodNotFound => METHOD_NOT_FOUND,
            Self::Internal(_) => INTERNAL_ERROR,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
