pub mod dispatch;
pub mod jsonrpc;
pub mod stdio;
pub mod tools;

pub use dispatch::{handle, handle_value};
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use stdio::{StdioError, StdioServer};
pub use tools::{Tool, ToolDefinition, ToolOutput, ToolRegistry};
