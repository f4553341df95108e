//! # Domain Types
//!
//! Entity shapes shared by the cart and catalog slices.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐  normalize   ┌─────────────────┐                   │
//! │  │   RawProduct    │ ───────────► │    Product      │                   │
//! │  │  ─────────────  │              │  ─────────────  │                   │
//! │  │  id? (num|str)  │              │  id             │                   │
//! │  │  title?         │              │  title          │                   │
//! │  │  price? (f64)   │              │  price (Money)  │                   │
//! │  │  image?         │              │  image          │                   │
//! │  │  ..ignored      │              └────────┬────────┘                   │
//! │  └─────────────────┘                       │ snapshot copy              │
//! │                                            ▼                            │
//! │                                   ┌─────────────────┐                   │
//! │                                   │  CartLineItem   │                   │
//! │                                   │  ─────────────  │                   │
//! │                                   │  id/title/      │                   │
//! │                                   │  price/image    │                   │
//! │                                   │  qty ≥ 1        │                   │
//! │                                   └─────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{price_from_decimal, validate_product_id};

// =============================================================================
// Product ID
// =============================================================================

/// Product identifier.
///
/// Upstream catalogs use numeric ids (`1`) or string ids (`"sku-1"`); both
/// normalize to the textual form. A blank id means "no id".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! impl_product_id_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for ProductId {
                fn from(id: $int) -> Self {
                    ProductId(id.to_string())
                }
            }
        )*
    };
}

// Integer literals default to i32, so the signed impls keep `ProductId::from(1)` working.
impl_product_id_from_integer!(i32, i64, u32, u64);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A purchasable product from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Unit price, never negative.
    pub price: Money,

    /// Image URL.
    pub image: String,
}

impl Product {
    /// Creates a product from already-validated parts.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            title: title.into(),
            price,
            image: image.into(),
        }
    }

    /// Creates a product from a decimal price, validating id and price.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::Product;
    ///
    /// let p = Product::try_new(1, "A", 9.99, "https://img/a.png").unwrap();
    /// assert_eq!(p.price.cents(), 999);
    /// assert!(Product::try_new(2, "B", -1.0, "").is_err());
    /// ```
    pub fn try_new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> CoreResult<Self> {
        let id = id.into();
        validate_product_id(&id)?;
        let price = price_from_decimal(price)?;
        Ok(Product::new(id, title, price, image))
    }
}

// =============================================================================
// Raw Upstream Product
// =============================================================================

/// Upstream id as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawProductId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawProductId> for ProductId {
    fn from(raw: RawProductId) -> Self {
        match raw {
            RawProductId::Number(n) => ProductId(n.to_string()),
            RawProductId::Text(s) => ProductId(s),
        }
    }
}

/// A catalog record exactly as the upstream endpoint returns it.
///
/// Only `{id, title, price, image}` are kept; any other upstream field
/// (category, rating, description, ...) is dropped during decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub id: Option<RawProductId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// A cart entry: a price snapshot of a product plus a quantity.
///
/// ## Snapshot Pattern
/// `title`, `price` and `image` are copied when the product is first added.
/// A later catalog refetch with a new price does not touch existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    pub id: ProductId,
    pub title: String,
    pub price: Money,
    pub image: String,

    /// Always ≥ 1 while the line exists.
    pub qty: u32,
}

impl CartLineItem {
    /// Creates a line with `qty = 1` from a product snapshot.
    pub fn from_product(product: &Product) -> Self {
        CartLineItem {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            qty: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.qty)
    }
}

// =============================================================================
// Fetch Status
// =============================================================================

/// Lifecycle stage of the most recent catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    /// No load issued yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The last resolved load returned a catalog.
    Succeeded,
    /// The last resolved load failed; see `CatalogStoreState::error`.
    Failed,
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStatus::Idle => write!(f, "idle"),
            FetchStatus::Loading => write!(f, "loading"),
            FetchStatus::Succeeded => write!(f, "succeeded"),
            FetchStatus::Failed => write!(f, "failed"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
