//! # Telemetry
//!
//! Installs the global `tracing` subscriber for hosts that do not bring
//! their own.
//!
//! `RUST_LOG` wins when set; otherwise `info,shopcart=debug`.

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,shopcart=debug";

/// Initializes the global subscriber.
///
/// Safe to call more than once: returns `false` when a subscriber was
/// already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
