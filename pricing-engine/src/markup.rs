//! Markup and price composition calculators
//!
//! All arithmetic goes through the exact-decimal primitives in
//! [`common::decimal`]; base prices, markups, and totals never touch binary
//! floating point. The calculators are lenient by contract: inputs are
//! validated at the boundary (see [`crate::PricingEngine::price_order`]),
//! not re-checked on every call.

use rust_decimal::Decimal;
use tracing::debug;

use common::decimal::{add, multiply, Amount, Price, Quantity, Rate};
use common::model::markup::{MarkupRule, MarkupType};

/// Compute the markup amount to add to a base price
///
/// A fixed rule yields its value unclamped, independent of the price: it is
/// an absolute amount set by policy, with nothing to clamp against. A percent
/// rule yields `price * value / 100`, then the floor clamp is applied before
/// the ceiling clamp, so a rule whose floor exceeds its ceiling resolves to
/// the ceiling. Rule consistency is not validated here.
pub fn calculate_markup(price: Price, rule: &MarkupRule) -> Amount {
    match rule.markup_type {
        MarkupType::Fixed => rule.value,
        MarkupType::Percent => {
            let mut markup = multiply(price, rule.value) / Decimal::ONE_HUNDRED;
            if let Some(floor) = rule.min_markup {
                if markup < floor {
                    debug!("Markup {} below floor {}, clamping", markup, floor);
                    markup = floor;
                }
            }
            if let Some(ceiling) = rule.max_markup {
                if markup > ceiling {
                    debug!("Markup {} above ceiling {}, clamping", markup, ceiling);
                    markup = ceiling;
                }
            }
            markup
        }
    }
}

/// Compute the platform service fee on an amount
///
/// `rate` is a fraction (0.003 = 0.3%), matching the platform config table.
/// This differs from percent markup rules, which carry whole-number
/// percentages; both conventions are fixed by the records callers store.
pub fn calculate_service_fee(amount: Amount, rate: Rate) -> Amount {
    multiply(amount, rate)
}

/// Final per-unit price: base price plus markup
pub fn calculate_final_price(original_price: Price, markup_amount: Amount) -> Price {
    add(original_price, markup_amount)
}

/// Discounted price, where `discount_rate` is the fraction retained
/// (0.8 = 20% off)
pub fn calculate_discount_price(original_price: Price, discount_rate: Rate) -> Price {
    multiply(original_price, discount_rate)
}

/// Line total: unit price times quantity
///
/// Integrality of `quantity` is a cart-side invariant, not enforced here.
pub fn calculate_total(unit_price: Price, quantity: Quantity) -> Amount {
    multiply(unit_price, quantity)
}
