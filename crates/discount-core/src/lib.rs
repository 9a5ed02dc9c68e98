//! # discount-core: Pure Discount Pricing
//!
//! Computes the price a customer pays given a price, a discount rate, and a
//! minimum purchase threshold. Every function is pure; there is no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 ★ discount-core (THIS CRATE) ★                          │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌────────────────┐     │
//! │   │   types   │  │   price   │  │ validation│  │   calculator   │     │
//! │   │  Request  │  │   Price   │  │   rules   │  │ DiscountCalc.  │     │
//! │   │   Quote   │  │  Display  │  │  checks   │  │ compute_...()  │     │
//! │   └───────────┘  └───────────┘  └───────────┘  └────────────────┘     │
//! │                                                                         │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - The discount calculation and its string entry point
//! - [`types`] - Request, rate, and quote types
//! - [`price`] - Price amount with one-decimal display
//! - [`validation`] - Input domain checks
//! - [`config`] - Display precision and sentinel text
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use discount_core::{compute_discounted_price, INVALID_INPUT};
//!
//! // Below the threshold: no discount
//! assert_eq!(compute_discounted_price(10.0, 0.2, 50.0), "10.0");
//!
//! // At the threshold: 20% off
//! assert_eq!(compute_discounted_price(50.0, 0.2, 50.0), "40.0");
//!
//! // Rate above 100%
//! assert_eq!(compute_discounted_price(50.0, 1.5, 50.0), INVALID_INPUT);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod config;
pub mod error;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{compute_discounted_price, DiscountCalculator};
pub use config::CalculatorConfig;
pub use error::{DiscountError, DiscountResult, ValidationError};
pub use price::Price;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Text returned in place of a price when any input is invalid.
pub const INVALID_INPUT: &str = "Invalid input";

/// Digits after the decimal point in formatted prices.
pub const DEFAULT_DISPLAY_DECIMALS: usize = 1;

/// Lowest accepted discount rate (no discount).
pub const MIN_DISCOUNT_RATE: f64 = 0.0;

/// Highest accepted discount rate (item is free).
pub const MAX_DISCOUNT_RATE: f64 = 1.0;
