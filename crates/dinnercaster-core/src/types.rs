use serde::{Deserialize, Serialize};

/// Public name of the service.
pub const SERVICE_NAME: &str = "Dinnercaster3";

/// Human-readable description of the service.
pub const SERVICE_DESCRIPTION: &str = "Dinnercaster3";

/// Version reported by the service and its protocol handshake.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Protocol revision announced in the `initialize` response.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Static record describing the running service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub description: String,
    pub version: String,
}

impl ServiceInfo {
    #[must_use]
    pub fn current() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

/// `serverInfo` block of the `initialize` handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    #[must_use]
    pub fn current() -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}
