use axum::http::HeaderName;
use clap::Parser;
use std::net::SocketAddr;

use crate::modules::certificate_cart::application::commit::DEFAULT_WRITE_ATTEMPTS;

#[derive(Debug, Clone, Parser)]
#[command(name = "certificate_cart", about = "Certificate cart pricing service")]
pub struct ServerConfig {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 8080)]
    pub port: u16,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    /// Header carrying the authenticated user id, set by the auth proxy.
    #[arg(long, env = "IDENTITY_HEADER", default_value = "x-user-id")]
    pub identity_header: HeaderName,

    /// Attempts per cart mutation when a concurrent write is detected.
    #[arg(long, env = "CART_WRITE_ATTEMPTS", default_value_t = DEFAULT_WRITE_ATTEMPTS)]
    pub write_attempts: u32,
}

impl ServerConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}
