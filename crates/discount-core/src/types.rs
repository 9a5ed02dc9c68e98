//! # Domain Types
//!
//! Request and result types for the discount calculator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ DiscountRequest │   │  DiscountRate   │   │   PriceQuote    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  price          │   │  fraction (f64) │   │  original       │       │
//! │  │  discount_rate  │   │  0.2 = 20% off  │   │  final_price    │       │
//! │  │  min_purchase   │   └─────────────────┘   │  rate           │       │
//! │  └─────────────────┘                         │  outcome        │       │
//! │                        ┌─────────────────┐   └─────────────────┘       │
//! │                        │ DiscountOutcome │                              │
//! │                        │  FullPrice      │                              │
//! │                        │  Discounted     │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::price::Price;
use crate::validation::{validate_discount_rate, ValidationResult};

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate as a fraction of the price.
///
/// 0.2 = 20% off. Never below 0 or above 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(try_from = "f64")]
#[ts(export)]
pub struct DiscountRate(f64);

impl DiscountRate {
    /// Creates a rate from a fraction in `[0, 1]`.
    pub fn new(fraction: f64) -> ValidationResult<Self> {
        validate_discount_rate(fraction)?;
        Ok(DiscountRate(fraction))
    }

    /// Creates a rate from a percentage (for convenience).
    ///
    /// ## Example
    /// ```rust
    /// use discount_core::types::DiscountRate;
    ///
    /// let rate = DiscountRate::from_percentage(20.0).unwrap();
    /// assert_eq!(rate.fraction(), 0.2);
    /// assert!(DiscountRate::from_percentage(150.0).is_err());
    /// ```
    pub fn from_percentage(pct: f64) -> ValidationResult<Self> {
        DiscountRate::new(pct / 100.0)
    }

    /// Returns the rate as a fraction.
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 * 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0.0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = ValidationError;

    fn try_from(fraction: f64) -> Result<Self, Self::Error> {
        DiscountRate::new(fraction)
    }
}

// =============================================================================
// Discount Request
// =============================================================================

/// The three raw inputs of one calculation.
///
/// Fields are unvalidated; the calculator validates them on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiscountRequest {
    /// Amount being purchased.
    pub price: f64,

    /// Fraction of the price taken off when the threshold is met.
    pub discount_rate: f64,

    /// Minimum purchase amount for the discount to apply.
    pub min_purchase: f64,
}

impl DiscountRequest {
    /// Bundles the three inputs.
    pub const fn new(price: f64, discount_rate: f64, min_purchase: f64) -> Self {
        DiscountRequest {
            price,
            discount_rate,
            min_purchase,
        }
    }

    /// Whether the price reaches the minimum purchase threshold.
    ///
    /// Only a price strictly below the threshold misses it; a NaN on either
    /// side counts as reaching it.
    #[inline]
    pub fn meets_threshold(&self) -> bool {
        !matches!(
            self.price.partial_cmp(&self.min_purchase),
            Some(Ordering::Less)
        )
    }
}

// =============================================================================
// Discount Outcome
// =============================================================================

/// Which branch the calculator took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiscountOutcome {
    /// Price is below the minimum purchase; nothing taken off.
    FullPrice,

    /// Price met the threshold; the rate was applied.
    Discounted,
}

// =============================================================================
// Price Quote
// =============================================================================

/// Result of a successful calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceQuote {
    /// Price as given.
    pub original: Price,

    /// Price the customer pays.
    pub final_price: Price,

    /// Requested rate (recorded even when the threshold was not met).
    pub rate: DiscountRate,

    /// Branch taken.
    pub outcome: DiscountOutcome,
}

impl PriceQuote {
    /// True if the discount rate was applied.
    #[inline]
    pub fn discount_applied(&self) -> bool {
        self.outcome == DiscountOutcome::Discounted
    }

    /// Amount taken off the original price.
    pub fn savings(&self) -> Price {
        self.original.savings_to(self.final_price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
