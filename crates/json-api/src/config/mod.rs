//! Server configuration module

use clap::Parser;

use crate::config::{
    logging::LoggingConfig,
    pricing::PricingSettings,
    server::ServerRuntimeConfig,
};

pub(crate) mod logging;
pub(crate) mod pricing;
pub(crate) mod server;

pub(crate) use logging::LogFormat;

/// Atelier JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "atelier-json", about = "Atelier JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Checkout pricing settings.
    #[command(flatten)]
    pub pricing: PricingSettings,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
