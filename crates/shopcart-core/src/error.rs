//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog normalization failures                 │
//! │  └── ValidationError  - Single-field failures                          │
//! │                                                                         │
//! │  shopcart-client errors (separate crate)                               │
//! │  ├── TransportError   - Fetch / decode failures                        │
//! │  └── ClientError      - Config + construction failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → catalog.error (as a string)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations never produce errors. Unknown ids and id-less products
//! are silent no-ops, so nothing in this file is reachable from the cart.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// An upstream catalog record could not be normalized into a `Product`.
    ///
    /// ## When This Occurs
    /// - Record has no `id`
    /// - Record has no `price`, or the price is negative / not finite
    ///
    /// The whole load is classified as a decode failure.
    #[error("Invalid product record at index {index}: {source}")]
    InvalidProduct {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for upstream records.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
