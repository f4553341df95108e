//! # Money Module
//!
//! Provides the `Money` type for prices and subtotals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Upstream catalog prices arrive as JSON numbers (f64):                  │
//! │    9.99 * 3 = 29.970000000000002  ❌                                    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Micros (1/1_000_000 of the major unit)          │
//! │    9_990_000 * 3 = 29_970_000 → "$29.97"                                │
//! │    125_000 * 10  =  1_250_000 → "$1.25"   (a $0.125 unit price)         │
//! │                                                                         │
//! │  Unit prices keep their sub-cent digits; products and sums are exact.   │
//! │  Rounding to whole cents happens only on the way out: `cents()` and     │
//! │  `Display`.                                                             │
//! │                                                                         │
//! │  The f64 → micros conversion happens exactly once, when an upstream     │
//! │  record is normalized (see `validation::price_from_decimal`).           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::money::Money;
//!
//! let price = Money::from_cents(999); // $9.99
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.cents(), 2997);
//! assert_eq!(line_total.to_string(), "$29.97");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

/// Micros in one cent.
pub const MICROS_PER_CENT: i64 = 10_000;

/// Micros in one major unit (dollar).
pub const MICROS_PER_UNIT: i64 = 1_000_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in micros (millionths of the major unit).
///
/// Prices in the catalog and the cart are never negative; the type is
/// signed so sums stay in plain `i64` arithmetic.
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartLineItem.price ──► line_total() ──► subtotal()
///                                                │
///                                                └──► "$29.97" in the UI
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents.saturating_mul(MICROS_PER_CENT))
    }

    /// Creates a Money value from micros.
    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        Money(micros)
    }

    /// Returns the exact value in micros.
    #[inline]
    pub const fn micros(&self) -> i64 {
        self.0
    }

    /// Returns the value rounded to the nearest cent (half away from zero).
    #[inline]
    pub const fn cents(&self) -> i64 {
        let whole = self.0 / MICROS_PER_CENT;
        let rest = self.0 % MICROS_PER_CENT;
        if rest >= MICROS_PER_CENT / 2 {
            whole + 1
        } else if rest <= -MICROS_PER_CENT / 2 {
            whole - 1
        } else {
            whole
        }
    }

    /// Returns the major unit (dollars) portion of the rounded value.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.cents() / 100
    }

    /// Returns the minor unit (cents) portion of the rounded value (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.cents() % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a line-item quantity, exactly.
    ///
    /// Saturates instead of overflowing, so selectors stay total.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    ///
    /// let sub_cent = Money::from_micros(125_000); // $0.125
    /// assert_eq!(sub_cent.multiply_quantity(10).cents(), 125);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two-decimal display, rounded to the cent, e.g. `$29.97`.
///
/// ## Note
/// Locale-aware formatting belongs to the presentation layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents() < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
