//! # shopcart-core: Pure State Container for the Shopping-Cart UI
//!
//! Entity shapes, state transitions and selectors, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        shopcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation layer (external)                   │   │
//! │  │      Product grid ──► Cart panel ──► Header badge               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / selector reads              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              shopcart-client (Store, HTTP transport)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopcart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌───────────┐      │   │
//! │  │   │  types   │  │   cart   │  │ catalog  │  │ selectors │      │   │
//! │  │   │ Product  │  │ CartStore│  │ Catalog  │  │ totals    │      │   │
//! │  │   │ LineItem │  │  State   │  │  State   │  │ subtotal  │      │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └───────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCKS • NO NETWORK • PURE TRANSITIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, CartLineItem, FetchStatus, upstream RawProduct
//! - [`money`] - Money type with integer micros
//! - [`cart`] - Cart slice and its five transitions
//! - [`catalog`] - Catalog slice, load lifecycle, record normalization
//! - [`selectors`] - Derived views (item list, totals)
//! - [`state`] - AppState composition root
//! - [`error`] - Domain error types
//! - [`validation`] - Field validators for upstream records
//!
//! ## Design Principles
//!
//! 1. **Value Transitions**: every operation consumes a state and returns the next one
//! 2. **Total Operations**: unknown ids and id-less products are no-ops, never errors
//! 3. **Integer Money**: prices and subtotals are micros (i64), rounded to cents only for display
//! 4. **Failures as State**: a failed load is `FetchStatus::Failed` plus a message
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::selectors::{subtotal, total_items};
//! use shopcart_core::{AppState, CartAction, Money, Product, ProductId};
//!
//! let a = Product::new(1, "A", Money::from_cents(999), "https://img/a.png");
//!
//! let state = AppState::new()
//!     .apply_cart(&CartAction::AddToCart(a.clone()))
//!     .apply_cart(&CartAction::AddToCart(a))
//!     .apply_cart(&CartAction::IncrementQty(ProductId::from(1)));
//!
//! assert_eq!(total_items(&state), 3);
//! assert_eq!(subtotal(&state).to_string(), "$29.97");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod selectors;
pub mod state;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartStoreState};
pub use catalog::{CatalogEvent, CatalogStoreState, FAILED_TO_LOAD_PRODUCTS};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use state::AppState;
pub use types::*;
