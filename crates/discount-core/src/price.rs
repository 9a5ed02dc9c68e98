//! # Price Module
//!
//! Provides the `Price` type for amounts flowing through the calculator.
//!
//! ## Display Precision
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices render with ONE decimal digit unless a precision is given:     │
//! │                                                                         │
//! │    format!("{}", price)      10   → "10.0"                             │
//! │    format!("{:.2}", price)   10   → "10.00"                            │
//! │                                                                         │
//! │  Non-finite amounts render as "inf" and "nan".                         │
//! │  No currency symbol, no thousands separator, no locale.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use discount_core::price::Price;
//! use discount_core::types::DiscountRate;
//!
//! let price = Price::new(50.0).unwrap();
//! let rate = DiscountRate::new(0.2).unwrap();
//!
//! assert_eq!(price.apply_discount(rate).to_string(), "40.0");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::DiscountRate;
use crate::validation::ValidationResult;
use crate::DEFAULT_DISPLAY_DECIMALS;

// =============================================================================
// Price Type
// =============================================================================

/// A monetary amount. Never negative.
///
/// Zero is a valid `Price` because a full discount produces it. The stricter
/// rule for calculator input (`price > 0`) lives in
/// [`validate_price`](crate::validation::validate_price).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(try_from = "f64")]
#[ts(export)]
pub struct Price(f64);

impl Price {
    /// Creates a price, rejecting negative amounts.
    ///
    /// ## Example
    /// ```rust
    /// use discount_core::price::Price;
    ///
    /// assert!(Price::new(10.0).is_ok());
    /// assert!(Price::new(0.0).is_ok());
    /// assert!(Price::new(-5.0).is_err());
    /// ```
    pub fn new(amount: f64) -> ValidationResult<Self> {
        if amount < 0.0 {
            return Err(ValidationError::Negative {
                field: "price".to_string(),
            });
        }

        Ok(Price(amount))
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Price(0.0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Applies a fractional discount: `amount * (1 - rate)`.
    ///
    /// ## Example
    /// ```rust
    /// use discount_core::price::Price;
    /// use discount_core::types::DiscountRate;
    ///
    /// let price = Price::new(80.0).unwrap();
    /// let discounted = price.apply_discount(DiscountRate::new(0.25).unwrap());
    /// assert_eq!(discounted.amount(), 60.0);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Price {
        Price(self.0 * (1.0 - rate.fraction()))
    }

    /// Difference between this price and a lower one.
    pub fn savings_to(&self, discounted: Price) -> Price {
        Price(self.0 - discounted.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the amount with the formatter's precision, or one decimal digit
/// when none is given. Infinity renders as `inf`, NaN as `nan`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return f.write_str("nan");
        }

        let decimals = f.precision().unwrap_or(DEFAULT_DISPLAY_DECIMALS);
        write!(f, "{:.*}", decimals, self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = ValidationError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Price::new(amount)
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
