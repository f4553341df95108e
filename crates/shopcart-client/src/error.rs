//! # Client Error Types
//!
//! Error types for configuration and catalog transport.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌───────────────────┐            ┌─────────────────────────────────┐  │
//! │  │  ClientError      │            │  TransportError                 │  │
//! │  │                   │            │                                 │  │
//! │  │  InvalidConfig    │  Transport │  Http     (connect, timeout)    │  │
//! │  │  InvalidUrl       │ ◄───────── │  Status   (non-2xx response)    │  │
//! │  │  ConfigLoadFailed │            │  Decode   (body is not a list)  │  │
//! │  └───────────────────┘            │  Message  (free-form upstream)  │  │
//! │                                   └─────────────────────────────────┘  │
//! │                                                                         │
//! │  TransportError never reaches the host from the Store: a failed load   │
//! │  is recorded in the catalog slice as its Display text.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for host-facing client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for catalog transport calls.
pub type TransportResult<T> = Result<T, TransportError>;

// =============================================================================
// Transport Errors
// =============================================================================

/// A failed catalog fetch.
///
/// The `Display` text is what ends up in `catalog.error`, so variants
/// render short, user-presentable messages.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS or timeout failure inside the HTTP client.
    #[error("{}", describe_http(.0))]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Failed to fetch products (HTTP {status})")]
    Status { status: u16 },

    /// The body was not a usable product list.
    #[error("Invalid product catalog: {0}")]
    Decode(String),

    /// Free-form failure reported by a transport as-is.
    #[error("{0}")]
    Message(String),
}

fn describe_http(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "timeout".to_string()
    } else {
        err.to_string()
    }
}

impl TransportError {
    /// Returns true if retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Http(_) | TransportError::Message(_) => true,
            TransportError::Status { status } => *status >= 500,
            TransportError::Decode(_) => false,
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

impl From<shopcart_core::CoreError> for TransportError {
    fn from(err: shopcart_core::CoreError) -> Self {
        TransportError::Decode(err.to_string())
    }
}

// =============================================================================
// Client Errors
// =============================================================================

/// Errors returned to the host when setting the client up.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid client configuration.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Invalid catalog endpoint.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// The HTTP client could not be built.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl ClientError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl(_)
                | ClientError::ConfigLoadFailed(_)
        )
    }
}
