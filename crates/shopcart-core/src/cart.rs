//! # Cart Store
//!
//! The cart slice: line items keyed by product id, and the five operations
//! that change them.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Transitions                               │
//! │                                                                         │
//! │  Command                  Transition                 Unknown / no id    │
//! │  ───────                  ──────────                 ───────────────    │
//! │                                                                         │
//! │  add_to_cart(p) ────────► new line qty=1             no-op (blank id)   │
//! │                           or existing qty += 1                          │
//! │                                                                         │
//! │  increment_qty(id) ─────► qty += 1                   no-op              │
//! │                                                                         │
//! │  decrement_qty(id) ─────► qty -= 1, drop at 0        no-op              │
//! │                                                                         │
//! │  remove_from_cart(id) ──► drop line                  no-op              │
//! │                                                                         │
//! │  clear_cart() ──────────► no lines                                      │
//! │                                                                         │
//! │  Every transition consumes the old state and returns the next one.      │
//! │  Nothing here can fail.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use shopcart_core::{CartStoreState, Money, Product, ProductId};
//!
//! let a = Product::new(1, "A", Money::from_cents(999), "https://img/a.png");
//!
//! let cart = CartStoreState::new()
//!     .add_to_cart(&a)
//!     .add_to_cart(&a)
//!     .increment_qty(&ProductId::from(1));
//!
//! assert_eq!(cart.get(&ProductId::from(1)).map(|l| l.qty), Some(3));
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::types::{CartLineItem, Product, ProductId};

// =============================================================================
// Cart Actions
// =============================================================================

/// A cart command as a value, for hosts that queue or log commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    AddToCart(Product),
    IncrementQty(ProductId),
    DecrementQty(ProductId),
    RemoveFromCart(ProductId),
    ClearCart,
}

impl CartAction {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddToCart(_) => "add_to_cart",
            CartAction::IncrementQty(_) => "increment_qty",
            CartAction::DecrementQty(_) => "decrement_qty",
            CartAction::RemoveFromCart(_) => "remove_from_cart",
            CartAction::ClearCart => "clear_cart",
        }
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The cart slice.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product increases quantity)
/// - Every stored `qty` is ≥ 1
/// - Iteration follows insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CartStoreState {
    items: Vec<CartLineItem>,
}

impl CartStoreState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Blank id: state returned unchanged
    /// - Already in cart: `qty += 1`, stored title/price/image kept
    /// - Not in cart: new line with `qty = 1`
    #[must_use]
    pub fn add_to_cart(mut self, product: &Product) -> Self {
        self.add_line(product);
        self
    }

    /// Adds one to the quantity of `id`. Unknown ids are ignored.
    #[must_use]
    pub fn increment_qty(mut self, id: &ProductId) -> Self {
        self.bump(id);
        self
    }

    /// Removes one from the quantity of `id`, dropping the line at zero.
    #[must_use]
    pub fn decrement_qty(mut self, id: &ProductId) -> Self {
        self.drop_one(id);
        self
    }

    /// Drops the line for `id` if present.
    #[must_use]
    pub fn remove_from_cart(mut self, id: &ProductId) -> Self {
        self.remove_line(id);
        self
    }

    /// Drops every line.
    #[must_use]
    pub fn clear_cart(mut self) -> Self {
        self.items.clear();
        self
    }

    /// Applies a command value.
    #[must_use]
    pub fn apply(mut self, action: &CartAction) -> Self {
        self.apply_in_place(action);
        self
    }

    /// Applies a command to this state and reports whether it changed.
    ///
    /// Only the touched line is written; a no-op command leaves every line
    /// as it was and returns `false`.
    pub fn apply_in_place(&mut self, action: &CartAction) -> bool {
        match action {
            CartAction::AddToCart(product) => self.add_line(product),
            CartAction::IncrementQty(id) => self.bump(id),
            CartAction::DecrementQty(id) => self.drop_one(id),
            CartAction::RemoveFromCart(id) => self.remove_line(id),
            CartAction::ClearCart => {
                let changed = !self.items.is_empty();
                self.items.clear();
                changed
            }
        }
    }

    fn add_line(&mut self, product: &Product) -> bool {
        if product.id.is_blank() {
            return false;
        }

        match self.position(&product.id) {
            Some(index) => increment_line(&mut self.items[index]),
            None => {
                self.items.push(CartLineItem::from_product(product));
                true
            }
        }
    }

    fn bump(&mut self, id: &ProductId) -> bool {
        match self.position(id) {
            Some(index) => increment_line(&mut self.items[index]),
            None => false,
        }
    }

    fn drop_one(&mut self, id: &ProductId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        if self.items[index].qty <= 1 {
            self.items.remove(index);
        } else {
            self.items[index].qty -= 1;
        }
        true
    }

    fn remove_line(&mut self, id: &ProductId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Looks up the line for `id`.
    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|line| &line.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.iter()
    }

    /// Lines in insertion order, as a slice.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|line| &line.id == id)
    }
}

/// Saturating `qty += 1`; false once the quantity is pinned at `u32::MAX`.
fn increment_line(line: &mut CartLineItem) -> bool {
    let next = line.qty.saturating_add(1);
    let changed = next != line.qty;
    line.qty = next;
    changed
}

// =============================================================================
// Unit Tests
// =============================================================================
