//! # Error Types
//!
//! Domain-specific error types for discount-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ├── DiscountError    - Calculator-level failures                      │
//! │  └── ValidationError  - Per-field input validation failures            │
//! │                                                                         │
//! │  Flow: ValidationError → DiscountError → "Invalid input" sentinel      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in error messages
//! 3. Errors are enum variants, never String
//! 4. The string entry point collapses every error into one sentinel

use thiserror::Error;

// =============================================================================
// Discount Error
// =============================================================================

/// Calculator errors.
///
/// The typed path (`DiscountCalculator::quote`) surfaces these directly. The
/// string path maps every variant to the configured sentinel text.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// One of the three inputs is outside its valid domain.
    ///
    /// ## When This Occurs
    /// - `price <= 0`
    /// - `discount_rate < 0` or `discount_rate > 1`
    /// - `min_purchase <= 0`
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A calculator configuration document could not be parsed.
    #[error("Invalid calculator configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl DiscountError {
    /// Returns true if this error came from input validation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DiscountError::InvalidInput(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Reported for the first field that fails, in the order
/// `price`, `discount_rate`, `min_purchase`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is outside an inclusive range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must not be below zero.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MustBePositive { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Negative { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with DiscountError.
pub type DiscountResult<T> = Result<T, DiscountError>;

// =============================================================================
// Unit Tests
// =============================================================================
