//! Decimal type utilities for precise monetary calculations
//!
//! Every monetary value in the platform flows through [`rust_decimal::Decimal`]
//! rather than binary floating point, so chained calculations never accumulate
//! representation error (`0.1 + 0.2` is exactly `0.3`). `f64` only appears at
//! the conversion boundary and is rejected when it is not finite.

use std::cmp::Ordering;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

use crate::error::{Error, Result};

/// Price type with exact decimal semantics
pub type Price = Decimal;

/// Quantity type with exact decimal semantics
pub type Quantity = Decimal;

/// Amount type with exact decimal semantics (typically Price * Quantity)
pub type Amount = Decimal;

/// Rate type for fractional rates such as service fees (0.003 = 0.3%)
pub type Rate = Decimal;

/// Exact sum of two amounts
pub fn add(a: Amount, b: Amount) -> Amount {
    a + b
}

/// Exact difference of two amounts (may be negative; no clamping here)
pub fn subtract(a: Amount, b: Amount) -> Amount {
    a - b
}

/// Exact product of two amounts
pub fn multiply(a: Amount, b: Amount) -> Amount {
    a * b
}

/// Exact quotient of two amounts
///
/// Fails with [`Error::DivisionByZero`] when `b` is zero. The error is never
/// swallowed here; callers decide whether to abort or substitute a divisor.
pub fn divide(a: Amount, b: Amount) -> Result<Amount> {
    a.checked_div(b).ok_or(Error::DivisionByZero)
}

/// Three-way comparison of two amounts with exact decimal semantics
pub fn compare_amounts(a: Amount, b: Amount) -> Ordering {
    a.cmp(&b)
}

/// Parse a decimal amount from its string representation
///
/// Accepts plain decimal notation at full precision. Leading/trailing
/// whitespace is tolerated; empty or non-numeric input fails with
/// [`Error::InvalidAmount`].
pub fn parse_amount(input: &str) -> Result<Amount> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidAmount("empty amount".to_string()));
    }
    trimmed
        .parse::<Decimal>()
        .map_err(|_| Error::InvalidAmount(format!("not a decimal amount: {:?}", input)))
}

/// Convert a native float into an exact amount
///
/// NaN and infinities fail with [`Error::InvalidAmount`]. Use only at the
/// conversion boundary; values originating inside the platform stay decimal.
pub fn amount_from_f64(value: f64) -> Result<Amount> {
    if !value.is_finite() {
        return Err(Error::InvalidAmount(format!(
            "amount must be finite, got {}",
            value
        )));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| Error::InvalidAmount(format!("not representable as a decimal: {}", value)))
}

/// Check whether a raw input is a legal monetary amount
///
/// True iff the input is non-empty, parses as a decimal, and is `>= 0`.
/// Boundary code (request handlers, form submissions) is expected to call
/// this before values enter the calculators; the arithmetic primitives
/// themselves stay lenient and do not re-validate on every call.
pub fn is_valid_amount(input: &str) -> bool {
    match parse_amount(input) {
        Ok(amount) => amount >= Decimal::ZERO,
        Err(_) => false,
    }
}

/// Precision helpers for common operations
pub mod precision {
    use super::*;
    use rust_decimal::RoundingStrategy;

    /// Default money precision (2 decimal places)
    pub const MONEY_DP: u32 = 2;

    /// Round to `dp` decimal places, half away from zero
    ///
    /// Half-up for positive values: `0.125` at 2dp rounds to `0.13`. Used
    /// consistently everywhere an amount is reduced to money precision.
    pub fn round(amount: Amount, dp: u32) -> Amount {
        amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Round away from zero (up, for positive values) to `dp` decimal places
    pub fn ceil(amount: Amount, dp: u32) -> Amount {
        amount.round_dp_with_strategy(dp, RoundingStrategy::AwayFromZero)
    }

    /// Round toward zero (down, for positive values) to `dp` decimal places
    pub fn floor(amount: Amount, dp: u32) -> Amount {
        amount.round_dp_with_strategy(dp, RoundingStrategy::ToZero)
    }

    /// Round an amount to standard money precision
    pub fn round_money(amount: Amount) -> Amount {
        round(amount, MONEY_DP)
    }
}
