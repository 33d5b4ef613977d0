//! Order pricing models and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Amount, Price, Quantity};
use crate::model::markup::MarkupRule;

/// A cart line item as submitted for pricing
///
/// The base price is the supplier-set price before any markup. The markup
/// rule, when present, comes from the supplier/material pricing records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Product/material being ordered
    pub product_id: Uuid,
    /// Supplier offering the product
    pub supplier_id: Uuid,
    /// Supplier-set price per unit, before markup
    pub base_price: Price,
    /// Units ordered
    pub quantity: Quantity,
    /// Markup rule for this product, if one is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup_rule: Option<MarkupRule>,
}

impl OrderLine {
    /// Create a line item without a markup rule
    pub fn new(product_id: Uuid, supplier_id: Uuid, base_price: Price, quantity: Quantity) -> Self {
        Self {
            product_id,
            supplier_id,
            base_price,
            quantity,
            markup_rule: None,
        }
    }

    /// Attach a markup rule
    pub fn with_markup_rule(mut self, rule: MarkupRule) -> Self {
        self.markup_rule = Some(rule);
        self
    }
}

/// A line item after pricing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    /// Product/material being ordered
    pub product_id: Uuid,
    /// Supplier offering the product
    pub supplier_id: Uuid,
    /// Supplier-set price per unit, before markup
    pub base_price: Price,
    /// Markup added per unit
    pub markup: Amount,
    /// Final per-unit price (base price + markup)
    pub unit_price: Price,
    /// Units ordered
    pub quantity: Quantity,
    /// Line total (unit price * quantity)
    pub line_total: Amount,
}

/// Subtotal of all priced lines belonging to one supplier
///
/// Per-supplier minimum-order thresholds are enforced by the ordering
/// service; it reads these subtotals to do so.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierSubtotal {
    /// Supplier the subtotal belongs to
    pub supplier_id: Uuid,
    /// Sum of line totals for this supplier
    pub subtotal: Amount,
}

/// Complete pricing of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPricing {
    /// Every line after pricing, in submission order
    pub lines: Vec<PricedLine>,
    /// Line totals grouped per supplier, ordered by supplier id
    pub supplier_subtotals: Vec<SupplierSubtotal>,
    /// Sum of all line totals
    pub subtotal: Amount,
    /// Platform service fee on the subtotal, rounded to money precision
    pub service_fee: Amount,
    /// Amount actually charged (subtotal + service fee)
    pub total: Amount,
    /// Instant the prices were computed (the order's price snapshot)
    pub priced_at: DateTime<Utc>,
}
