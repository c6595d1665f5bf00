use clap::Parser;

/// Runtime configuration for the server binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dinnercaster-server",
    about = "Dinnercaster3 demo service",
    version
)]
pub struct ServerConfig {
    /// Interface to bind the HTTP listener to
    #[arg(long, env = "DINNERCASTER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port for the HTTP listener
    #[arg(long, env = "DINNERCASTER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Serve line-delimited JSON-RPC on stdin/stdout instead of HTTP
    #[arg(long, env = "DINNERCASTER_STDIO")]
    pub stdio: bool,
}

impl ServerConfig {
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
