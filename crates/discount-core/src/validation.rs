//! # Validation Module
//!
//! Input validation for the discount calculator.
//!
//! ## Input Domain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Valid Input Domain                                 │
//! │                                                                         │
//! │  price          (0, +∞]     must be positive                            │
//! │  discount_rate  [0, 1]      fraction of the price taken off            │
//! │  min_purchase   (0, +∞]     threshold for the discount to apply        │
//! │                                                                         │
//! │  Checked in field order; the first violation is reported.              │
//! │  NaN fails none of the comparisons and is accepted.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use discount_core::validation::{validate_discount_rate, validate_price};
//!
//! assert!(validate_price(49.99).is_ok());
//! assert!(validate_discount_rate(1.5).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::DiscountRequest;
use crate::{MAX_DISCOUNT_RATE, MIN_DISCOUNT_RATE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

fn ensure_positive(field: &str, value: f64) -> ValidationResult<()> {
    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be strictly positive (zero is rejected)
///
/// Only the `<= 0` comparison rejects: NaN and `+inf` pass and flow through
/// the calculation as ordinary floats.
///
/// ## Example
/// ```rust
/// use discount_core::validation::validate_price;
///
/// assert!(validate_price(10.0).is_ok());
/// assert!(validate_price(0.0).is_err());
/// assert!(validate_price(-10.0).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    ensure_positive("price", price)
}

/// Validates a discount rate expressed as a fraction.
///
/// ## Rules
/// - Must not be below 0 or above 1 (both ends inclusive)
///
/// ## Example
/// ```rust
/// use discount_core::validation::validate_discount_rate;
///
/// assert!(validate_discount_rate(0.0).is_ok());
/// assert!(validate_discount_rate(1.0).is_ok());
/// assert!(validate_discount_rate(-0.1).is_err());
/// ```
#[allow(clippy::manual_range_contains)]
pub fn validate_discount_rate(rate: f64) -> ValidationResult<()> {
    // Two comparisons, not a range check: NaN must not be rejected
    if rate < MIN_DISCOUNT_RATE || rate > MAX_DISCOUNT_RATE {
        return Err(ValidationError::OutOfRange {
            field: "discount_rate".to_string(),
            min: MIN_DISCOUNT_RATE,
            max: MAX_DISCOUNT_RATE,
        });
    }

    Ok(())
}

/// Validates the minimum purchase threshold.
///
/// ## Rules
/// - Must be strictly positive
///
/// `+inf` is accepted and means the discount never applies.
pub fn validate_min_purchase(min_purchase: f64) -> ValidationResult<()> {
    ensure_positive("min_purchase", min_purchase)
}

/// Validates all three inputs of a request.
///
/// ## User Workflow
/// ```text
/// DiscountRequest { price, discount_rate, min_purchase }
///      │
///      ├── price <= 0?                  → MustBePositive
///      │
///      ├── discount_rate < 0 or > 1?    → OutOfRange
///      │
///      ├── min_purchase <= 0?           → MustBePositive
///      │
///      └── OK → calculator decides between full price and discount
/// ```
pub fn validate_request(request: &DiscountRequest) -> ValidationResult<()> {
    validate_price(request.price)?;
    validate_discount_rate(request.discount_rate)?;
    validate_min_purchase(request.min_purchase)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
