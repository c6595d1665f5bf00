mod health;
mod home;
mod mcp;

pub use health::{health, info};
pub use home::home;
pub use mcp::mcp_request;
