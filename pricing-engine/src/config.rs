//! Configuration for the pricing engine

use std::env;

use common::decimal::{dec, Rate};

/// Configuration for the pricing engine
///
/// Plain data threaded explicitly into [`crate::PricingEngine`]; never held
/// as module-level state, so calculations stay referentially transparent.
/// The values mirror the platform config table (`markup_enabled`,
/// `service_fee_rate`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// Apply markup rules when pricing lines; when off, every line prices
    /// at its base price
    pub markup_enabled: bool,
    /// Platform service fee as a fraction of the order subtotal
    /// (0.003 = 0.3%)
    pub service_fee_rate: Rate,
    /// Decimal places charged amounts are rounded to
    pub money_dp: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            markup_enabled: true,
            service_fee_rate: dec!(0.003),
            money_dp: 2,
        }
    }
}

impl PricingConfig {
    /// Create a configuration overlaying environment variables
    ///
    /// Reads `PRICING_MARKUP_ENABLED` and `PRICING_SERVICE_FEE_RATE`;
    /// missing or malformed values fall back to the platform defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            markup_enabled: env::var("PRICING_MARKUP_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.markup_enabled),
            service_fee_rate: env::var("PRICING_SERVICE_FEE_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.service_fee_rate),
            money_dp: defaults.money_dp,
        }
    }

    /// Create a configuration with custom values
    pub fn new(markup_enabled: bool, service_fee_rate: Rate, money_dp: u32) -> Self {
        Self {
            markup_enabled,
            service_fee_rate,
            money_dp,
        }
    }
}
