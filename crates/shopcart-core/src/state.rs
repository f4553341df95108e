//! # Application State
//!
//! The composition root: one value holding both slices.
//!
//! ```text
//! AppState
//! ├── cart:    CartStoreState     (changed only by CartAction)
//! └── catalog: CatalogStoreState  (changed only by CatalogEvent)
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::cart::{CartAction, CartStoreState};
use crate::catalog::{CatalogEvent, CatalogStoreState};

/// Whole application state, read by selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AppState {
    pub cart: CartStoreState,
    pub catalog: CatalogStoreState,
}

impl AppState {
    /// Empty cart, idle catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a cart command to the cart slice.
    #[must_use]
    pub fn apply_cart(self, action: &CartAction) -> Self {
        AppState {
            cart: self.cart.apply(action),
            catalog: self.catalog,
        }
    }

    /// Routes a lifecycle event to the catalog slice.
    #[must_use]
    pub fn apply_catalog(self, event: CatalogEvent) -> Self {
        AppState {
            cart: self.cart,
            catalog: self.catalog.apply(event),
        }
    }

    /// Applies a cart command in place; true when the cart changed.
    pub fn apply_cart_in_place(&mut self, action: &CartAction) -> bool {
        self.cart.apply_in_place(action)
    }

    /// Applies a lifecycle event in place; true when the catalog changed.
    pub fn apply_catalog_in_place(&mut self, event: CatalogEvent) -> bool {
        self.catalog.apply_in_place(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{FetchStatus, Product, ProductId};

    #[test]
    fn test_slices_are_independent() {
        let product = Product::new(1, "A", Money::from_cents(999), "u");
        let state = AppState::new()
            .apply_catalog(CatalogEvent::Pending)
            .apply_cart(&CartAction::AddToCart(product.clone()));

        assert_eq!(state.catalog.status, FetchStatus::Loading);
        assert_eq!(state.cart.len(), 1);

        let state = state.apply_catalog(CatalogEvent::Rejected(Some("timeout".into())));
        assert_eq!(state.cart.get(&ProductId::from(1)).map(|l| l.qty), Some(1));
    }

    #[test]
    fn test_refetch_does_not_reprice_cart() {
        let old = Product::new(1, "A", Money::from_cents(999), "u");
        let new = Product::new(1, "A", Money::from_cents(1999), "u");

        let state = AppState::new()
            .apply_catalog(CatalogEvent::Fulfilled(vec![old.clone()]))
            .apply_cart(&CartAction::AddToCart(old))
            .apply_catalog(CatalogEvent::Pending)
            .apply_catalog(CatalogEvent::Fulfilled(vec![new]));

        assert_eq!(state.catalog.entities[0].price.cents(), 1999);
        assert_eq!(
            state.cart.get(&ProductId::from(1)).map(|l| l.price.cents()),
            Some(999)
        );
    }

    #[test]
    fn test_in_place_routing_leaves_other_slice_alone() {
        let product = Product::new(1, "A", Money::from_cents(999), "u");
        let mut state = AppState::new();
        state.apply_catalog_in_place(CatalogEvent::Fulfilled(vec![product.clone()]));
        let catalog = state.catalog.clone();

        assert!(state.apply_cart_in_place(&CartAction::AddToCart(product)));
        assert!(!state.apply_cart_in_place(&CartAction::IncrementQty(ProductId::from(2))));
        assert_eq!(state.catalog, catalog);

        assert!(state.apply_catalog_in_place(CatalogEvent::Pending));
        assert_eq!(state.cart.len(), 1);
    }

    #[test]
    fn test_serializes_for_presentation() {
        let state = AppState::new();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["catalog"]["status"], "idle");
        assert_eq!(json["cart"]["items"], serde_json::json!([]));
    }
}
