//! # Client Configuration
//!
//! Where the catalog comes from and how long a fetch may take.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPCART_CATALOG_URL=http://localhost:3000/products                │
//! │     SHOPCART_CATALOG_TIMEOUT_SECS=5                                    │
//! │                                                                         │
//! │  2. TOML Config File (only when the host passes a path)                │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     https://fakestoreapi.com/products, 10 second timeout               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is read from a default on-disk location; state and settings
//! live in process memory unless the host opts in.
//!
//! ## Configuration File Format
//! ```toml
//! [catalog]
//! url = "https://fakestoreapi.com/products"
//! timeout_secs = 10
//! user_agent = "shopcart/0.1"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Product catalog endpoint used when nothing else is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

// =============================================================================
// Catalog Settings
// =============================================================================

/// Settings for the catalog transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Full URL of the product list endpoint.
    #[serde(default = "default_catalog_url")]
    pub url: String,

    /// Request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Optional `User-Agent` header.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            url: default_catalog_url(),
            timeout_secs: default_timeout(),
            user_agent: None,
        }
    }
}

impl CatalogSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// =============================================================================
// Client Config
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
}

impl ClientConfig {
    /// Parses a TOML document, then applies env overrides and validates.
    pub fn from_toml_str(contents: &str) -> ClientResult<Self> {
        let mut config: ClientConfig = toml::from_str(contents)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration.
    ///
    /// ## Loading Order
    /// 1. Start with defaults
    /// 2. Load from `config_path` if one is given and exists
    /// 3. Apply environment variable overrides
    /// 4. Validate
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                info!(?path, "Loading client config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Like [`ClientConfig::load`], falling back to defaults on any error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load client config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        let url = Url::parse(&self.catalog.url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::InvalidUrl(format!(
                "Catalog URL must start with http:// or https://, got: {}",
                self.catalog.url
            )));
        }

        if self.catalog.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SHOPCART_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.catalog.url = url;
        }

        if let Ok(secs) = std::env::var("SHOPCART_CATALOG_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.catalog.timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring non-numeric catalog timeout"),
            }
        }
    }
}
