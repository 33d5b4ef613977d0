//! Order pricing composition

use std::collections::BTreeMap;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use common::decimal::{add, precision, Amount};
use common::error::{Error, Result};
use common::model::order::{OrderLine, OrderPricing, PricedLine, SupplierSubtotal};

use crate::config::PricingConfig;
use crate::markup::{calculate_final_price, calculate_markup, calculate_service_fee, calculate_total};

/// The pricing engine responsible for turning cart lines into order totals
///
/// Holds only immutable configuration; every call allocates fresh values and
/// the same inputs always produce the same outputs, which idempotent price
/// recalculation and audit recomputation rely on.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create an engine with the platform default configuration
    pub fn new() -> Self {
        Self {
            config: PricingConfig::default(),
        }
    }

    /// Create an engine with a custom configuration
    pub fn with_config(config: PricingConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine prices with
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price a single line item
    ///
    /// The markup is zero when the markup toggle is off or the line carries
    /// no rule. Inputs are not validated here; see [`Self::price_order`].
    pub fn price_line(&self, line: &OrderLine) -> PricedLine {
        let markup = if self.config.markup_enabled {
            line.markup_rule
                .as_ref()
                .map(|rule| calculate_markup(line.base_price, rule))
                .unwrap_or(Amount::ZERO)
        } else {
            Amount::ZERO
        };
        let unit_price = calculate_final_price(line.base_price, markup);
        let line_total = calculate_total(unit_price, line.quantity);

        PricedLine {
            product_id: line.product_id,
            supplier_id: line.supplier_id,
            base_price: line.base_price,
            markup,
            unit_price,
            quantity: line.quantity,
            line_total,
        }
    }

    /// Price a full order
    ///
    /// Validates every line at this boundary, prices each one, groups line
    /// totals per supplier, then adds the service fee on the subtotal,
    /// rounded to the configured money precision, to get the amount charged.
    /// Supplier subtotals come back ordered by supplier id.
    pub fn price_order(&self, lines: &[OrderLine]) -> Result<OrderPricing> {
        for line in lines {
            validate_line(line)?;
        }

        let priced: Vec<PricedLine> = lines.iter().map(|line| self.price_line(line)).collect();

        let mut subtotal = Amount::ZERO;
        let mut per_supplier: BTreeMap<Uuid, Amount> = BTreeMap::new();
        for line in &priced {
            subtotal = add(subtotal, line.line_total);
            let entry = per_supplier.entry(line.supplier_id).or_insert(Amount::ZERO);
            *entry = add(*entry, line.line_total);
        }

        let service_fee = precision::round(
            calculate_service_fee(subtotal, self.config.service_fee_rate),
            self.config.money_dp,
        );
        let total = add(subtotal, service_fee);

        debug!(
            "Priced order: {} lines, {} suppliers, subtotal {}, service fee {}",
            priced.len(),
            per_supplier.len(),
            subtotal,
            service_fee
        );

        Ok(OrderPricing {
            lines: priced,
            supplier_subtotals: per_supplier
                .into_iter()
                .map(|(supplier_id, subtotal)| SupplierSubtotal {
                    supplier_id,
                    subtotal,
                })
                .collect(),
            subtotal,
            service_fee,
            total,
            priced_at: Utc::now(),
        })
    }
}

/// Reject lines that must not reach the calculators
fn validate_line(line: &OrderLine) -> Result<()> {
    if line.base_price < Decimal::ZERO {
        return Err(Error::InvalidAmount(format!(
            "base price must be non-negative, got {}",
            line.base_price
        )));
    }
    if line.quantity < Decimal::ZERO {
        return Err(Error::InvalidAmount(format!(
            "quantity must be non-negative, got {}",
            line.quantity
        )));
    }
    if let Some(rule) = &line.markup_rule {
        rule.validate()?;
    }
    Ok(())
}
