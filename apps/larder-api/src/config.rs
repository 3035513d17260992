//! Server configuration

use std::path::PathBuf;

use tracing::info;

/// HTTP server settings read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory of the browser front-end, served for unmatched paths
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// Environment variables:
    /// - `LARDER_HOST`: bind host (default: `0.0.0.0`)
    /// - `PORT`: bind port (default: 3000)
    /// - `LARDER_STATIC_DIR`: front-end directory (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through a variable lookup
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = var("LARDER_HOST").unwrap_or(defaults.host);
        let port = var("PORT")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(|| {
                info!("PORT not set or invalid, using default: {}", defaults.port);
                defaults.port
            });
        let static_dir = var("LARDER_STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            static_dir,
        }
    }

    /// Bind address as `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
