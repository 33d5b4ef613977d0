// File: tests/test_helpers.rs

use common::decimal::{Price, Quantity};
use common::model::markup::MarkupRule;
use common::model::order::OrderLine;
use uuid::Uuid;

/// Build a cart line for a known supplier
pub fn line_for_supplier(
    supplier_id: Uuid,
    base_price: Price,
    quantity: Quantity,
) -> OrderLine {
    OrderLine::new(Uuid::new_v4(), supplier_id, base_price, quantity)
}

/// Build a cart line carrying a markup rule
pub fn line_with_rule(
    supplier_id: Uuid,
    base_price: Price,
    quantity: Quantity,
    rule: MarkupRule,
) -> OrderLine {
    line_for_supplier(supplier_id, base_price, quantity).with_markup_rule(rule)
}
