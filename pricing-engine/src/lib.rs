//! Order pricing and markup computation engine
//!
//! Converts supplier base prices into customer-facing prices: markup rules
//! (fixed or clamped percentage), service fees, and exact line/order totals.
//! Pure and synchronous; the HTTP layer, persistence, and UI are external
//! collaborators that consume these functions.

pub mod config;
pub mod engine;
pub mod format;
pub mod markup;

pub use config::PricingConfig;
pub use engine::PricingEngine;
pub use format::format_money;
pub use markup::{
    calculate_discount_price, calculate_final_price, calculate_markup, calculate_service_fee,
    calculate_total,
};
