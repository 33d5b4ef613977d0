//! Currency string rendering
//!
//! Display layers go through [`format_money`] rather than ad hoc string
//! interpolation so every frontend presents amounts identically.

use common::decimal::{precision, Amount};
use common::model::money::MoneyFormatOptions;

/// Render an amount as a human-readable currency string
///
/// Always shows exactly `options.decimals` fractional digits, zero-padded;
/// excess digits are rounded half away from zero, never an error. The
/// integer part is grouped with the thousands separator every three digits
/// from the right. A negative sign precedes the currency prefix; separators
/// apply only to the magnitude.
///
/// ```
/// use common::decimal::dec;
/// use common::model::money::MoneyFormatOptions;
/// use pricing_engine::format_money;
///
/// let options = MoneyFormatOptions::default();
/// assert_eq!(format_money(dec!(1234567.8), &options), "¥1,234,567.80");
/// ```
pub fn format_money(amount: Amount, options: &MoneyFormatOptions) -> String {
    let rounded = precision::round(amount, options.decimals);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let magnitude = rounded.abs().to_string();

    let (int_digits, frac_digits) = match magnitude.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (magnitude.as_str(), ""),
    };

    let mut body = group_thousands(int_digits, &options.thousand_separator);
    if options.decimals > 0 {
        let mut frac = frac_digits.to_string();
        frac.truncate(options.decimals as usize);
        while frac.len() < options.decimals as usize {
            frac.push('0');
        }
        body.push_str(&options.decimal_separator);
        body.push_str(&frac);
    }

    format!(
        "{}{}{}{}",
        if negative { "-" } else { "" },
        options.prefix,
        body,
        options.suffix
    )
}

/// Insert the separator every three digits from the right, never before the
/// leading digit
fn group_thousands(digits: &str, separator: &str) -> String {
    if separator.is_empty() {
        return digits.to_string();
    }
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
