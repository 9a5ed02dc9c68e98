//! # Discount Calculator
//!
//! Turns a price, a discount rate, and a minimum purchase threshold into the
//! price the customer pays.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_discounted_price(price, discount_rate, min_purchase)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_request ── invalid ──► "Invalid input"                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  price < min_purchase ── yes ──► price            e.g. "10.0"          │
//! │       │                                                                 │
//! │       no                                                                │
//! │       ▼                                                                 │
//! │  price * (1 - discount_rate)                      e.g. "40.0"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two entry points share this flow:
//! - [`DiscountCalculator::quote`] returns a typed [`PriceQuote`] or error
//! - [`DiscountCalculator::format_price`] / [`compute_discounted_price`]
//!   return text, with the sentinel in place of any error

use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::DiscountResult;
use crate::price::Price;
use crate::types::{DiscountOutcome, DiscountRate, DiscountRequest, PriceQuote};
use crate::validation::validate_request;

// =============================================================================
// Calculator
// =============================================================================

/// Stateless discount calculator.
///
/// Holds only its immutable configuration, so one instance can be shared
/// across threads by reference.
#[derive(Debug, Clone, Default)]
pub struct DiscountCalculator {
    config: CalculatorConfig,
}

impl DiscountCalculator {
    /// Calculator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with a custom configuration.
    pub fn with_config(config: CalculatorConfig) -> Self {
        DiscountCalculator { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Validates a request and computes the final price.
    ///
    /// ## Example
    /// ```rust
    /// use discount_core::{DiscountCalculator, DiscountRequest};
    ///
    /// let calculator = DiscountCalculator::new();
    ///
    /// let quote = calculator.quote(&DiscountRequest::new(50.0, 0.2, 50.0)).unwrap();
    /// assert!(quote.discount_applied());
    /// assert_eq!(quote.final_price.to_string(), "40.0");
    ///
    /// assert!(calculator.quote(&DiscountRequest::new(50.0, 1.5, 50.0)).is_err());
    /// ```
    pub fn quote(&self, request: &DiscountRequest) -> DiscountResult<PriceQuote> {
        match Self::price_request(request) {
            Ok(quote) => {
                debug!(
                    price = request.price,
                    discount_rate = request.discount_rate,
                    min_purchase = request.min_purchase,
                    outcome = ?quote.outcome,
                    final_price = quote.final_price.amount(),
                    "Computed discounted price"
                );
                Ok(quote)
            }
            Err(err) => {
                debug!(
                    price = request.price,
                    discount_rate = request.discount_rate,
                    min_purchase = request.min_purchase,
                    error = %err,
                    "Rejected discount request"
                );
                Err(err)
            }
        }
    }

    fn price_request(request: &DiscountRequest) -> DiscountResult<PriceQuote> {
        validate_request(request)?;

        let original = Price::new(request.price)?;
        let rate = DiscountRate::new(request.discount_rate)?;

        let (final_price, outcome) = if request.meets_threshold() {
            (original.apply_discount(rate), DiscountOutcome::Discounted)
        } else {
            (original, DiscountOutcome::FullPrice)
        };

        Ok(PriceQuote {
            original,
            final_price,
            rate,
            outcome,
        })
    }

    /// Computes the final price as text, or the sentinel on invalid input.
    ///
    /// ## Example
    /// ```rust
    /// use discount_core::DiscountCalculator;
    ///
    /// let calculator = DiscountCalculator::new();
    /// assert_eq!(calculator.format_price(10.0, 0.2, 50.0), "10.0");
    /// assert_eq!(calculator.format_price(-10.0, 0.2, 50.0), "Invalid input");
    /// ```
    pub fn format_price(&self, price: f64, discount_rate: f64, min_purchase: f64) -> String {
        let request = DiscountRequest::new(price, discount_rate, min_purchase);

        match self.quote(&request) {
            Ok(quote) => format!("{:.*}", self.config.decimals(), quote.final_price),
            Err(_) => self.config.invalid_input_text.clone(),
        }
    }

    /// Whether a string returned by [`format_price`](Self::format_price) is
    /// the invalid-input sentinel.
    pub fn is_sentinel(&self, output: &str) -> bool {
        output == self.config.invalid_input_text
    }
}

/// Computes a discounted price with the default configuration.
///
/// Returns `"Invalid input"` when `price <= 0`, `discount_rate` is outside
/// `[0, 1]`, or `min_purchase <= 0`. Otherwise returns the price (below the
/// threshold) or `price * (1 - discount_rate)`, formatted with one decimal
/// digit.
///
/// ## Example
/// ```rust
/// use discount_core::compute_discounted_price;
///
/// assert_eq!(compute_discounted_price(10.0, 0.2, 50.0), "10.0");
/// assert_eq!(compute_discounted_price(50.0, 0.2, 50.0), "40.0");
/// assert_eq!(compute_discounted_price(50.0, 1.5, 50.0), "Invalid input");
/// ```
pub fn compute_discounted_price(price: f64, discount_rate: f64, min_purchase: f64) -> String {
    DiscountCalculator::new().format_price(price, discount_rate, min_purchase)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiscountError;
    use crate::INVALID_INPUT;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_documented_cases() {
        init_tracing();
        assert_eq!(compute_discounted_price(-10.0, -0.1, -50.0), INVALID_INPUT);
        assert_eq!(compute_discounted_price(10.0, 0.2, 50.0), "10.0");
        assert_eq!(compute_discounted_price(50.0, 0.2, 50.0), "40.0");
        assert_eq!(compute_discounted_price(50.0, 1.5, 50.0), INVALID_INPUT);
    }

    #[test]
    fn test_below_threshold_ignores_rate() {
        for rate in [0.0, 0.2, 0.5, 1.0] {
            assert_eq!(compute_discounted_price(10.0, rate, 50.0), "10.0");
        }
        assert_eq!(compute_discounted_price(49.99, 0.9, 50.0), "50.0");
    }

    #[test]
    fn test_at_or_above_threshold_applies_rate() {
        assert_eq!(compute_discounted_price(100.0, 0.25, 50.0), "75.0");
        assert_eq!(compute_discounted_price(80.0, 0.5, 50.0), "40.0");
        assert_eq!(compute_discounted_price(50.0, 0.0, 50.0), "50.0");
        assert_eq!(compute_discounted_price(50.0, 1.0, 50.0), "0.0");
        assert_eq!(compute_discounted_price(33.0, 0.1, 10.0), "29.7");
    }

    #[test]
    fn test_zero_boundaries_are_invalid() {
        assert_eq!(compute_discounted_price(0.0, 0.2, 50.0), INVALID_INPUT);
        assert_eq!(compute_discounted_price(50.0, 0.2, 0.0), INVALID_INPUT);
    }

    #[test]
    fn test_infinite_threshold_never_discounts() {
        assert_eq!(compute_discounted_price(10.0, 0.2, f64::INFINITY), "10.0");
        assert_eq!(compute_discounted_price(1e9, 0.5, f64::INFINITY), "1000000000.0");
    }

    #[test]
    fn test_infinite_price_formats_as_inf() {
        assert_eq!(compute_discounted_price(f64::INFINITY, 0.2, 50.0), "inf");
        assert_eq!(
            compute_discounted_price(f64::INFINITY, 0.2, f64::INFINITY),
            "inf"
        );
        // inf * 0
        assert_eq!(compute_discounted_price(f64::INFINITY, 1.0, 50.0), "nan");
    }

    #[test]
    fn test_nan_inputs_pass_validation() {
        assert_eq!(compute_discounted_price(f64::NAN, 0.2, 50.0), "nan");
        assert_eq!(compute_discounted_price(50.0, f64::NAN, 50.0), "nan");
        assert_eq!(compute_discounted_price(10.0, f64::NAN, 50.0), "10.0");
        // 10 < NaN is false, so the discount applies
        assert_eq!(compute_discounted_price(10.0, 0.2, f64::NAN), "8.0");
    }

    #[test]
    fn test_out_of_domain_infinities_are_invalid() {
        assert_eq!(
            compute_discounted_price(f64::NEG_INFINITY, 0.2, 50.0),
            INVALID_INPUT
        );
        assert_eq!(compute_discounted_price(50.0, f64::INFINITY, 50.0), INVALID_INPUT);
        assert_eq!(
            compute_discounted_price(50.0, f64::NEG_INFINITY, 50.0),
            INVALID_INPUT
        );
        assert_eq!(
            compute_discounted_price(50.0, 0.2, f64::NEG_INFINITY),
            INVALID_INPUT
        );
    }

    #[test]
    fn test_quote_with_infinite_threshold() {
        let quote = DiscountCalculator::new()
            .quote(&DiscountRequest::new(10.0, 0.2, f64::INFINITY))
            .unwrap();

        assert_eq!(quote.outcome, DiscountOutcome::FullPrice);
        assert_eq!(quote.final_price.amount(), 10.0);
    }

    #[test]
    fn test_quote_full_price() {
        let quote = DiscountCalculator::new()
            .quote(&DiscountRequest::new(10.0, 0.2, 50.0))
            .unwrap();

        assert_eq!(quote.outcome, DiscountOutcome::FullPrice);
        assert!(!quote.discount_applied());
        assert_eq!(quote.final_price, quote.original);
        assert!(quote.savings().is_zero());
        assert_eq!(quote.rate.fraction(), 0.2);
    }

    #[test]
    fn test_quote_discounted() {
        let quote = DiscountCalculator::new()
            .quote(&DiscountRequest::new(100.0, 0.25, 50.0))
            .unwrap();

        assert_eq!(quote.outcome, DiscountOutcome::Discounted);
        assert_eq!(quote.original.amount(), 100.0);
        assert_eq!(quote.final_price.amount(), 75.0);
        assert_eq!(quote.savings().amount(), 25.0);
    }

    #[test]
    fn test_quote_reports_first_invalid_field() {
        init_tracing();
        let calculator = DiscountCalculator::new();

        let err = calculator
            .quote(&DiscountRequest::new(10.0, 1.5, -50.0))
            .unwrap_err();
        match err {
            DiscountError::InvalidInput(cause) => assert_eq!(cause.field(), "discount_rate"),
            other => panic!("unexpected error: {other}"),
        }

        let err = calculator
            .quote(&DiscountRequest::new(50.0, 0.2, -50.0))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: min_purchase must be positive"
        );
    }

    #[test]
    fn test_custom_config() {
        let calculator = DiscountCalculator::with_config(CalculatorConfig {
            display_decimals: 2,
            invalid_input_text: "N/A".to_string(),
        });

        assert_eq!(calculator.format_price(10.0, 0.2, 50.0), "10.00");
        assert_eq!(calculator.format_price(50.0, 0.2, 50.0), "40.00");
        assert_eq!(calculator.format_price(-10.0, 0.2, 50.0), "N/A");
        assert!(calculator.is_sentinel("N/A"));
        assert!(!calculator.is_sentinel(INVALID_INPUT));
    }

    #[test]
    fn test_is_sentinel_default() {
        let calculator = DiscountCalculator::new();
        let output = calculator.format_price(50.0, -0.1, 50.0);
        assert!(calculator.is_sentinel(&output));
        assert!(!calculator.is_sentinel("40.0"));
    }

    #[test]
    fn test_calculator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DiscountCalculator>();
    }

    // =========================================================================
    // Equivalence partitions
    // =========================================================================
    //
    // price:          A0 negative (-10)   A1 below threshold (10)   A2 at threshold (50)
    // discount_rate:  B0 negative (-0.1)  B1 zero (0)  B2 inside (0.2)  B3 above one (1.5)
    // min_purchase:   C0 negative (-50)   C1 positive (50)

    mod partitions {
        use super::*;

        #[test]
        fn a0_b0_c0_everything_negative() {
            assert_eq!(compute_discounted_price(-10.0, -0.1, -50.0), INVALID_INPUT);
        }

        #[test]
        fn a0_b1_c1_negative_price() {
            assert_eq!(compute_discounted_price(-10.0, 0.0, 50.0), INVALID_INPUT);
        }

        #[test]
        fn a0_b2_c0_negative_price_and_threshold() {
            assert_eq!(compute_discounted_price(-10.0, 0.2, -50.0), INVALID_INPUT);
        }

        #[test]
        fn a0_b3_c1_negative_price_rate_above_one() {
            assert_eq!(compute_discounted_price(-10.0, 1.5, 50.0), INVALID_INPUT);
        }

        #[test]
        fn a1_b1_c0_negative_threshold() {
            assert_eq!(compute_discounted_price(10.0, 0.0, -50.0), INVALID_INPUT);
        }

        #[test]
        fn a1_b3_c0_rate_above_one_negative_threshold() {
            assert_eq!(compute_discounted_price(10.0, 1.5, -50.0), INVALID_INPUT);
        }

        #[test]
        fn a1_b0_c1_negative_rate() {
            assert_eq!(compute_discounted_price(10.0, -0.1, 50.0), INVALID_INPUT);
        }

        #[test]
        fn a1_b2_c1_below_threshold_keeps_price() {
            assert_eq!(compute_discounted_price(10.0, 0.2, 50.0), "10.0");
        }

        #[test]
        fn a2_b1_c0_negative_threshold() {
            assert_eq!(compute_discounted_price(50.0, 0.0, -50.0), INVALID_INPUT);
        }

        #[test]
        fn a2_b2_c0_negative_threshold() {
            assert_eq!(compute_discounted_price(50.0, 0.2, -50.0), INVALID_INPUT);
        }

        #[test]
        fn a2_b0_c1_negative_rate() {
            assert_eq!(compute_discounted_price(50.0, -0.1, 50.0), INVALID_INPUT);
        }

        #[test]
        fn a2_b3_c1_rate_above_one() {
            assert_eq!(compute_discounted_price(50.0, 1.5, 50.0), INVALID_INPUT);
        }

        #[test]
        fn a2_b2_c1_at_threshold_applies_discount() {
            assert_eq!(compute_discounted_price(50.0, 0.2, 50.0), "40.0");
        }
    }
}
