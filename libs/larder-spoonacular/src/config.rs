//! Spoonacular client configuration

use std::fmt;
use std::time::Duration;

use tracing::{info, warn};

/// Default Spoonacular API root
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Default timeout applied to every outbound call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Configuration for [`SpoonacularClient`](crate::SpoonacularClient)
///
/// A missing `api_key` is not an error here: the client is still built and
/// every search then fails with a configuration error.
#[derive(Clone)]
pub struct SpoonacularConfig {
    /// API credential sent as the `apiKey` query parameter
    pub api_key: Option<String>,
    /// API root, without trailing slash
    pub base_url: String,
    /// Per-call timeout
    pub timeout: Duration,
}

impl Default for SpoonacularConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SpoonacularConfig {
    /// Load configuration from the process environment
    ///
    /// Environment variables:
    /// - `SPOONACULAR_API_KEY`: API credential (blank counts as unset)
    /// - `SPOONACULAR_BASE_URL`: API root (default: `https://api.spoonacular.com`)
    /// - `SPOONACULAR_TIMEOUT_SECS`: per-call timeout in seconds (default: 8)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through a variable lookup
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = var("SPOONACULAR_API_KEY").filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!("SPOONACULAR_API_KEY not set, recipe searches will fail");
        }

        let base_url = var("SPOONACULAR_BASE_URL").unwrap_or_else(|| {
            info!("SPOONACULAR_BASE_URL not set, using default: {}", DEFAULT_BASE_URL);
            DEFAULT_BASE_URL.to_string()
        });

        let timeout = match var("SPOONACULAR_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(value = %raw, "Invalid SPOONACULAR_TIMEOUT_SECS, using default");
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Self {
            api_key,
            base_url,
            timeout,
        }
    }

    /// Set the API credential
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// The credential must never reach the logs.
impl fmt::Debug for SpoonacularConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpoonacularConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
