//! # shopcart-client: State Holder for the Shopping-Cart UI
//!
//! Wraps the pure transitions of `shopcart-core` in one shared, observable
//! store and performs the only I/O in the system: fetching the catalog.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Client Architecture                             │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         Store (store.rs)                         │  │
//! │  │                                                                  │  │
//! │  │  watch::Sender<AppState>  ──subscribe()──►  presentation layer   │  │
//! │  │  cart commands applied synchronously, one update each            │  │
//! │  └───────────────────────────────┬──────────────────────────────────┘  │
//! │                                  │ load_catalog() / ensure_loaded()     │
//! │                                  ▼                                      │
//! │  ┌────────────────────────┐   ┌──────────────────────────────────────┐ │
//! │  │ dyn CatalogTransport   │◄──│ HttpCatalogTransport (reqwest)       │ │
//! │  │ (transport.rs)         │   │ configured from ClientConfig         │ │
//! │  └────────────────────────┘   └──────────────────────────────────────┘ │
//! │                                                                         │
//! │  Failures never escape the Store: they become FetchStatus::Failed.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use shopcart_client::{ClientConfig, Store};
//! use shopcart_core::selectors::total_items;
//!
//! # async fn run() -> shopcart_client::ClientResult<()> {
//! shopcart_client::telemetry::init_tracing();
//!
//! let store = Store::from_config(&ClientConfig::load(None)?)?;
//! store.ensure_loaded().await;
//!
//! if let Some(first) = store.read(|s| s.catalog.entities.first().cloned()) {
//!     store.add_to_cart(first);
//! }
//! tracing::info!(items = store.read(total_items), "Cart updated");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod store;
pub mod telemetry;
pub mod transport;

pub use config::{CatalogSettings, ClientConfig, DEFAULT_CATALOG_URL};
pub use error::{ClientError, ClientResult, TransportError, TransportResult};
pub use store::Store;
pub use transport::{CatalogTransport, HttpCatalogTransport};
