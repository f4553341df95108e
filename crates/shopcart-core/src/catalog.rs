//! # Catalog Store
//!
//! The catalog slice: the fetched product list plus the lifecycle of the
//! most recent load.
//!
//! ## Load Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Fetch States                                 │
//! │                                                                         │
//! │   ┌────────┐  Pending   ┌─────────┐  Fulfilled(list)  ┌───────────┐     │
//! │   │  Idle  │ ─────────► │ Loading │ ────────────────► │ Succeeded │     │
//! │   └────────┘            └────┬────┘                   └─────┬─────┘     │
//! │                              │ Rejected(msg)                │           │
//! │                              ▼                              │ Pending   │
//! │                         ┌─────────┐      Pending            │           │
//! │                         │ Failed  │ ────────► Loading ◄─────┘           │
//! │                         └─────────┘                                     │
//! │                                                                         │
//! │  Pending from ANY state resets `error` and enters Loading.             │
//! │  Rejected keeps the previous `entities` so a retry after a success     │
//! │  does not blank the product grid.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The async half (awaiting the transport) lives in `shopcart-client`; this
//! module only holds the pure transitions the resolution is fed back into.

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{FetchStatus, Product, ProductId, RawProduct};
use crate::validation::{price_from_decimal, validate_product_id};

/// Message recorded when a load fails without a usable upstream message.
pub const FAILED_TO_LOAD_PRODUCTS: &str = "Failed to load products";

// =============================================================================
// Catalog Events
// =============================================================================

/// Transition events of a catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A load was issued.
    Pending,
    /// The transport resolved with a normalized catalog.
    Fulfilled(Vec<Product>),
    /// The transport failed; the message is used when non-blank.
    Rejected(Option<String>),
}

// =============================================================================
// Catalog State
// =============================================================================

/// The catalog slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CatalogStoreState {
    /// Products from the last successful load, in upstream order.
    pub entities: Vec<Product>,

    pub status: FetchStatus,

    /// Set only while `status == Failed`.
    pub error: Option<String>,
}

impl CatalogStoreState {
    /// Creates an idle catalog with no products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters `Loading` and clears `error`, whatever the current status.
    ///
    /// Guarding against a second load while one is in flight is the
    /// caller's job.
    #[must_use]
    pub fn begin_load(mut self) -> Self {
        self.status = FetchStatus::Loading;
        self.error = None;
        self
    }

    /// Records a successful load.
    #[must_use]
    pub fn load_succeeded(mut self, products: Vec<Product>) -> Self {
        self.entities = products;
        self.status = FetchStatus::Succeeded;
        self.error = None;
        self
    }

    /// Records a failed load; `entities` is left as it was.
    #[must_use]
    pub fn load_failed(mut self, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FAILED_TO_LOAD_PRODUCTS.to_string());

        self.status = FetchStatus::Failed;
        self.error = Some(message);
        self
    }

    /// Applies a lifecycle event.
    #[must_use]
    pub fn apply(self, event: CatalogEvent) -> Self {
        match event {
            CatalogEvent::Pending => self.begin_load(),
            CatalogEvent::Fulfilled(products) => self.load_succeeded(products),
            CatalogEvent::Rejected(message) => self.load_failed(message),
        }
    }

    /// Applies an event to this state and reports whether it changed.
    pub fn apply_in_place(&mut self, event: CatalogEvent) -> bool {
        let status = self.status;
        let error = self.error.clone();
        let entities_changed = match &event {
            CatalogEvent::Fulfilled(products) => *products != self.entities,
            CatalogEvent::Pending | CatalogEvent::Rejected(_) => false,
        };

        *self = std::mem::take(self).apply(event);
        entities_changed || self.status != status || self.error != error
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Looks up a catalog product by id.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.entities.iter().find(|p| &p.id == id)
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Normalizes one upstream record to `{id, title, price, image}`.
///
/// ## Rules
/// - `id`: required, non-blank
/// - `price`: required, finite, non-negative
/// - `title`, `image`: default to `""`
pub fn normalize_product(raw: RawProduct, index: usize) -> CoreResult<Product> {
    let invalid = |source| CoreError::InvalidProduct { index, source };

    let id: ProductId = raw
        .id
        .map(ProductId::from)
        .unwrap_or_else(|| ProductId::new(""));
    validate_product_id(&id).map_err(invalid)?;

    let price = match raw.price {
        Some(price) => price_from_decimal(price).map_err(invalid)?,
        None => {
            return Err(invalid(ValidationError::Required {
                field: "price".to_string(),
            }))
        }
    };

    Ok(Product {
        id,
        title: raw.title.unwrap_or_default(),
        price,
        image: raw.image.unwrap_or_default(),
    })
}

/// Normalizes a whole upstream catalog, keeping upstream order.
///
/// One bad record fails the whole catalog: it is treated like a malformed
/// response body.
///
/// ## Example
/// ```rust
/// use shopcart_core::catalog::normalize_catalog;
/// use shopcart_core::RawProduct;
///
/// let raw: Vec<RawProduct> =
///     serde_json::from_str(r#"[{"id":1,"title":"X","price":5,"image":"u","rating":{}}]"#).unwrap();
/// let products = normalize_catalog(raw).unwrap();
/// assert_eq!(products[0].price.cents(), 500);
/// ```
pub fn normalize_catalog(raw: Vec<RawProduct>) -> CoreResult<Vec<Product>> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| normalize_product(record, index))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::RawProductId;

    fn product_x() -> Product {
        Product::new(1, "X", Money::from_cents(500), "u")
    }

    #[test]
    fn test_initial_state_is_idle() {
        let catalog = CatalogStoreState::new();
        assert_eq!(catalog.status, FetchStatus::Idle);
        assert!(catalog.entities.is_empty());
        assert_eq!(catalog.error, None);
    }

    #[test]
    fn test_begin_load_from_any_state() {
        let failed = CatalogStoreState::new().begin_load().load_failed(Some("boom".into()));
        let reloading = failed.begin_load();
        assert_eq!(reloading.status, FetchStatus::Loading);
        assert_eq!(reloading.error, None);
        assert!(reloading.is_loading());

        let succeeded = CatalogStoreState::new().begin_load().load_succeeded(vec![product_x()]);
        let reloading = succeeded.begin_load();
        assert_eq!(reloading.status, FetchStatus::Loading);
        assert_eq!(reloading.entities, vec![product_x()]);
    }

    #[test]
    fn test_load_succeeded() {
        let catalog = CatalogStoreState::new()
            .begin_load()
            .load_succeeded(vec![product_x()]);

        assert_eq!(catalog.status, FetchStatus::Succeeded);
        assert_eq!(catalog.entities, vec![product_x()]);
        assert_eq!(catalog.error, None);
        assert_eq!(catalog.find(&ProductId::from(1)), Some(&product_x()));
        assert_eq!(catalog.find(&ProductId::from(2)), None);
    }

    #[test]
    fn test_load_failed_keeps_entities() {
        let before = CatalogStoreState::new()
            .begin_load()
            .load_succeeded(vec![product_x()]);

        let after = before.clone().begin_load().load_failed(Some("timeout".into()));

        assert_eq!(after.status, FetchStatus::Failed);
        assert_eq!(after.error.as_deref(), Some("timeout"));
        assert_eq!(after.entities, before.entities);
    }

    #[test]
    fn test_load_failed_fallback_message() {
        let catalog = CatalogStoreState::new().begin_load().load_failed(None);
        assert_eq!(catalog.error.as_deref(), Some(FAILED_TO_LOAD_PRODUCTS));

        let catalog = CatalogStoreState::new().begin_load().load_failed(Some("  ".into()));
        assert_eq!(catalog.error.as_deref(), Some("Failed to load products"));
    }

    #[test]
    fn test_apply_events() {
        let catalog = CatalogStoreState::new().apply(CatalogEvent::Pending);
        assert_eq!(catalog.status, FetchStatus::Loading);

        let catalog = catalog.apply(CatalogEvent::Rejected(Some("offline".into())));
        assert_eq!(catalog.status, FetchStatus::Failed);

        let catalog = catalog
            .apply(CatalogEvent::Pending)
            .apply(CatalogEvent::Fulfilled(vec![product_x()]));
        assert_eq!(catalog.status, FetchStatus::Succeeded);
        assert_eq!(catalog.error, None);
    }

    #[test]
    fn test_apply_in_place_reports_changes() {
        let mut catalog = CatalogStoreState::new();

        assert!(catalog.apply_in_place(CatalogEvent::Pending));
        assert!(!catalog.apply_in_place(CatalogEvent::Pending));

        assert!(catalog.apply_in_place(CatalogEvent::Fulfilled(vec![product_x()])));
        assert!(catalog.apply_in_place(CatalogEvent::Pending));
        assert!(!catalog.apply_in_place(CatalogEvent::Pending));
        assert!(catalog.apply_in_place(CatalogEvent::Fulfilled(vec![product_x()])));
        assert!(!catalog.apply_in_place(CatalogEvent::Fulfilled(vec![product_x()])));

        assert!(catalog.apply_in_place(CatalogEvent::Rejected(Some("timeout".into()))));
        assert!(!catalog.apply_in_place(CatalogEvent::Rejected(Some("timeout".into()))));
        assert!(catalog.apply_in_place(CatalogEvent::Rejected(None)));
        assert_eq!(catalog.entities, vec![product_x()]);
    }

    #[test]
    fn test_normalize_catalog() {
        let raw = vec![
            RawProduct {
                id: Some(RawProductId::Number(1.into())),
                title: Some("X".into()),
                price: Some(5.0),
                image: Some("u".into()),
            },
            RawProduct {
                id: Some(RawProductId::Text("two".into())),
                title: None,
                price: Some(0.5),
                image: None,
            },
        ];

        let products = normalize_catalog(raw).unwrap();
        assert_eq!(products[0], product_x());
        assert_eq!(products[1].id.as_str(), "two");
        assert_eq!(products[1].title, "");
        assert_eq!(products[1].price.cents(), 50);
    }

    #[test]
    fn test_normalize_rejects_missing_id() {
        let raw = vec![
            RawProduct {
                id: Some(RawProductId::Number(1.into())),
                price: Some(1.0),
                ..RawProduct::default()
            },
            RawProduct {
                price: Some(1.0),
                ..RawProduct::default()
            },
        ];

        assert_eq!(
            normalize_catalog(raw),
            Err(CoreError::InvalidProduct {
                index: 1,
                source: ValidationError::Required {
                    field: "id".to_string()
                },
            })
        );
    }

    #[test]
    fn test_normalize_rejects_bad_price() {
        let missing = RawProduct {
            id: Some(RawProductId::Number(1.into())),
            ..RawProduct::default()
        };
        assert!(normalize_product(missing, 0).is_err());

        let negative = RawProduct {
            id: Some(RawProductId::Number(1.into())),
            price: Some(-3.0),
            ..RawProduct::default()
        };
        assert!(matches!(
            normalize_product(negative, 0),
            Err(CoreError::InvalidProduct {
                source: ValidationError::MustBeNonNegative { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_normalize_empty_catalog() {
        assert_eq!(normalize_catalog(Vec::new()), Ok(Vec::new()));
    }
}
