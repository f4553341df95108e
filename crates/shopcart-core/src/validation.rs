//! # Validation Module
//!
//! Field validators applied to upstream catalog records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Transport (shopcart-client)                                  │
//! │  ├── HTTP status classification                                        │
//! │  └── JSON shape (array of objects) via serde                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── id present and non-blank                                          │
//! │  └── price present, finite, non-negative → Money                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart operations                                              │
//! │  └── No validation: id-less / unknown ids are silent no-ops            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::validation::price_from_decimal;
//!
//! assert_eq!(price_from_decimal(9.99).unwrap().cents(), 999);
//! assert!(price_from_decimal(-0.5).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::{Money, MICROS_PER_UNIT};
use crate::types::ProductId;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates that a product id is present.
pub fn validate_product_id(id: &ProductId) -> ValidationResult<()> {
    if id.is_blank() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Converts an upstream decimal price into `Money`.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (zero is allowed: free items)
/// - Kept to six decimal places (micros), so sub-cent prices survive
///
/// ## Example
/// ```rust
/// use shopcart_core::validation::price_from_decimal;
///
/// assert_eq!(price_from_decimal(109.95).unwrap().cents(), 10995);
/// assert_eq!(price_from_decimal(5.0).unwrap().cents(), 500);
/// assert_eq!(price_from_decimal(0.0).unwrap().cents(), 0);
/// assert!(price_from_decimal(f64::NAN).is_err());
/// ```
pub fn price_from_decimal(price: f64) -> ValidationResult<Money> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    // 9.99 * 1e6 = 9990000.000000001, so round rather than truncate
    let micros = (price * MICROS_PER_UNIT as f64).round();
    if micros >= i64::MAX as f64 {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    Ok(Money::from_micros(micros as i64))
}

// =============================================================================
// Unit Tests
// =============================================================================
