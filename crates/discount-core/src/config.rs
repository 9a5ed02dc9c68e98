//! # Calculator Configuration
//!
//! Presentation settings for the string-returning calculator path.
//!
//! ## Configuration Sources (Priority Order)
//! 1. JSON document handed in by the caller (`CalculatorConfig::from_json`)
//! 2. Defaults (this file)
//!
//! Missing fields in a JSON document fall back to their defaults.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "displayDecimals": 1,
//!   "invalidInputText": "Invalid input"
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DiscountResult;
use crate::{DEFAULT_DISPLAY_DECIMALS, INVALID_INPUT};

/// Calculator configuration.
///
/// Read-only once handed to a `DiscountCalculator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorConfig {
    /// Digits after the decimal point in formatted prices.
    pub display_decimals: u8,

    /// Text returned instead of a price when input is invalid.
    pub invalid_input_text: String,
}

impl Default for CalculatorConfig {
    /// One decimal digit and the `"Invalid input"` sentinel.
    fn default() -> Self {
        CalculatorConfig {
            display_decimals: DEFAULT_DISPLAY_DECIMALS as u8,
            invalid_input_text: INVALID_INPUT.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// ## Example
    /// ```rust
    /// use discount_core::config::CalculatorConfig;
    ///
    /// let config = CalculatorConfig::from_json(r#"{"displayDecimals": 2}"#).unwrap();
    /// assert_eq!(config.display_decimals, 2);
    /// assert_eq!(config.invalid_input_text, "Invalid input");
    /// ```
    pub fn from_json(json: &str) -> DiscountResult<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;

        debug!(
            display_decimals = config.display_decimals,
            invalid_input_text = %config.invalid_input_text,
            "Loaded calculator configuration"
        );

        Ok(config)
    }

    /// Display precision as a formatter width.
    #[inline]
    pub fn decimals(&self) -> usize {
        self.display_decimals as usize
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
