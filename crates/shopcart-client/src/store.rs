//! # Store
//!
//! The single state holder: owns the current `AppState`, applies commands
//! one at a time, and runs the async catalog load.
//!
//! ## Concurrency
//! The state lives in a `tokio::sync::watch` channel:
//! 1. Every command is one `send_if_modified` call, so updates never interleave
//! 2. Transitions edit the slice in place and report whether anything
//!    changed; subscribers are woken only then
//! 3. `Store` clones share the same channel, so a load can run on its own
//!    task while cart commands keep arriving from others
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Operations                                  │
//! │                                                                         │
//! │  Host Action              Store Method             State Change         │
//! │  ───────────              ────────────             ────────────         │
//! │                                                                         │
//! │  Click "Add" ───────────► add_to_cart() ─────────► cart line +1        │
//! │  Click "+" / "-" ───────► increment/decrement ───► qty ±1 (0 removes)  │
//! │  Click "Remove" ────────► remove_from_cart() ────► line deleted        │
//! │  Click "Clear" ─────────► clear_cart() ──────────► cart emptied        │
//! │                                                                         │
//! │  First render ──────────► ensure_loaded() ───┐                         │
//! │  Click "Retry" ─────────► load_catalog() ────┼──► Loading              │
//! │                                              │    (await transport)     │
//! │                                              └──► Succeeded | Failed    │
//! │                                                                         │
//! │  NOTE: overlapping loads are not prevented; the last one to resolve    │
//! │        wins, and a resolution older than the newest call is logged.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use shopcart_core::catalog::normalize_catalog;
use shopcart_core::{AppState, CartAction, CatalogEvent, FetchStatus, Product, ProductId};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ClientResult, TransportError};
use crate::transport::{CatalogTransport, HttpCatalogTransport};

struct StoreInner {
    state: watch::Sender<AppState>,
    transport: Arc<dyn CatalogTransport>,
    /// Number of catalog loads issued so far.
    generation: AtomicU64,
}

/// Shared handle to the application state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.borrow())
            .field("generation", &self.inner.generation.load(Ordering::SeqCst))
            .finish()
    }
}

impl Store {
    /// Creates a store with an empty cart and an idle catalog.
    pub fn new(transport: impl CatalogTransport + 'static) -> Self {
        Self::with_state(transport, AppState::new())
    }

    /// Creates a store seeded with an existing state.
    pub fn with_state(transport: impl CatalogTransport + 'static, state: AppState) -> Self {
        let (sender, _) = watch::channel(state);
        Store {
            inner: Arc::new(StoreInner {
                state: sender,
                transport: Arc::new(transport),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Creates a store backed by the HTTP catalog transport.
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let transport = HttpCatalogTransport::new(&config.catalog)?;
        info!(url = %transport.url(), "Catalog transport ready");
        Ok(Self::new(transport))
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    /// Runs `f` against the current state without cloning it.
    ///
    /// Keep `f` short: it holds the channel's read lock.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Returns a receiver that is notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.state.subscribe()
    }

    // =========================================================================
    // Cart Commands
    // =========================================================================

    /// Applies a cart command.
    pub fn dispatch(&self, action: CartAction) {
        let changed = self
            .inner
            .state
            .send_if_modified(|state| state.apply_cart_in_place(&action));
        debug!(action = action.name(), changed, "Cart command applied");
    }

    pub fn add_to_cart(&self, product: Product) {
        self.dispatch(CartAction::AddToCart(product));
    }

    pub fn increment_qty(&self, id: impl Into<ProductId>) {
        self.dispatch(CartAction::IncrementQty(id.into()));
    }

    pub fn decrement_qty(&self, id: impl Into<ProductId>) {
        self.dispatch(CartAction::DecrementQty(id.into()));
    }

    pub fn remove_from_cart(&self, id: impl Into<ProductId>) {
        self.dispatch(CartAction::RemoveFromCart(id.into()));
    }

    pub fn clear_cart(&self) {
        self.dispatch(CartAction::ClearCart);
    }

    // =========================================================================
    // Catalog Load
    // =========================================================================

    /// Loads the catalog, whatever the current status.
    ///
    /// Never fails: a transport or decode error ends in
    /// `FetchStatus::Failed` with the message recorded in `catalog.error`.
    pub async fn load_catalog(&self) -> FetchStatus {
        let generation = self.begin_load(false).unwrap_or_default();
        self.finish_load(generation).await
    }

    /// Loads the catalog only if no load has been issued yet.
    ///
    /// The `Idle` check and the switch to `Loading` happen in one update,
    /// so concurrent callers start at most one load between them.
    pub async fn ensure_loaded(&self) -> FetchStatus {
        match self.begin_load(true) {
            Some(generation) => self.finish_load(generation).await,
            None => self.read(|state| state.catalog.status),
        }
    }

    /// Enters `Loading` and returns the new generation, or `None` when
    /// `only_if_idle` is set and a load was already issued.
    fn begin_load(&self, only_if_idle: bool) -> Option<u64> {
        let mut generation = None;

        self.inner.state.send_if_modified(|state| {
            if only_if_idle && state.catalog.status != FetchStatus::Idle {
                return false;
            }
            generation = Some(self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1);
            state.apply_catalog_in_place(CatalogEvent::Pending)
        });

        if let Some(generation) = generation {
            info!(generation, "Loading product catalog");
        }
        generation
    }

    async fn finish_load(&self, generation: u64) -> FetchStatus {
        let outcome = self
            .inner
            .transport
            .fetch_catalog()
            .await
            .and_then(|raw| normalize_catalog(raw).map_err(TransportError::from));

        let latest = self.inner.generation.load(Ordering::SeqCst);
        if generation < latest {
            warn!(
                generation,
                latest, "Stale catalog load resolved after a newer one was issued"
            );
        }

        let event = match outcome {
            Ok(products) => {
                info!(generation, count = products.len(), "Product catalog loaded");
                CatalogEvent::Fulfilled(products)
            }
            Err(err) => {
                warn!(generation, error = %err, "Product catalog load failed");
                CatalogEvent::Rejected(Some(err.to_string()))
            }
        };

        let mut status = FetchStatus::Idle;
        self.inner.state.send_if_modified(|state| {
            let changed = state.apply_catalog_in_place(event);
            status = state.catalog.status;
            changed
        });
        status
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
