//! Runtime configuration from command-line flags, falling back to
//! environment variables (a `.env` file is loaded first when present).

use std::num::NonZeroUsize;
use clap::Parser;
use tokio::net::TcpListener;
use crate::service::IdStrategy;

#[derive(Debug, Clone, Parser)]
#[command(name = "user_registry", version, about = "In-memory user registration service")]
pub struct Config {
    /// Host name or address to bind the HTTP server to
    #[arg(long, env = "USER_REGISTRY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "USER_REGISTRY_PORT", default_value_t = 3000)]
    pub port: u16,

    /// How new users get their id
    #[arg(long, env = "USER_REGISTRY_ID_STRATEGY", value_enum, default_value_t = IdStrategy::Timestamp)]
    pub id_strategy: IdStrategy,

    /// Capacity of the store actor's request queue (at least 1)
    #[arg(long, env = "USER_REGISTRY_CHANNEL_CAPACITY", default_value = "32")]
    pub channel_capacity: NonZeroUsize,
}

impl Config {
    /// Binds the listener, resolving `host` so names like `localhost` work.
    pub async fn bind(&self) -> Result<TcpListener, String> {
        TcpListener::bind((self.host.as_str(), self.port))
            .await
            .map_err(|e| format!("Failed to bind {}:{}: {}", self.host, self.port, e))
    }
}
