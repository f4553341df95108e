//! # Selectors
//!
//! Pure derivations over `AppState`, recomputed on every read.
//!
//! ## Derived Values
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Selector          Formula                    Empty cart                │
//! │  ────────          ───────                    ──────────                │
//! │  items_array       lines in insertion order   []                        │
//! │  total_items       Σ qty                      0                         │
//! │  subtotal          Σ qty × price  (micros)    $0.00                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is cached, so a selector can never disagree with the state it
//! was given.

use crate::cart::CartStoreState;
use crate::money::Money;
use crate::state::AppState;
use crate::types::{CartLineItem, FetchStatus, Product};

/// The keyed cart view.
pub fn items_map(state: &AppState) -> &CartStoreState {
    &state.cart
}

/// Cart lines in map enumeration (insertion) order.
pub fn items_array(state: &AppState) -> Vec<&CartLineItem> {
    state.cart.iter().collect()
}

/// Total units across all lines.
pub fn total_items(state: &AppState) -> u64 {
    state.cart.iter().map(|line| u64::from(line.qty)).sum()
}

/// Σ qty × price, exact at micro precision; round with `cents()` or `Display`.
pub fn subtotal(state: &AppState) -> Money {
    state.cart.iter().map(CartLineItem::line_total).sum()
}

pub fn catalog_entities(state: &AppState) -> &[Product] {
    &state.catalog.entities
}

pub fn catalog_status(state: &AppState) -> FetchStatus {
    state.catalog.status
}

pub fn catalog_error(state: &AppState) -> Option<&str> {
    state.catalog.error.as_deref()
}

// =============================================================================
// Unit Tests
// =============================================================================
