pub mod error;
pub mod types;

pub use error::Error;
pub use types::{ServerInfo, ServiceInfo, PROTOCOL_VERSION, SERVICE_NAME, SERVICE_VERSION};
