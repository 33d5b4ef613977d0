//! Money presentation options

use serde::{Deserialize, Serialize};

/// Options controlling how an amount renders as a currency string
///
/// Purely a rendering concern; has no effect on stored or computed values.
/// Display layers pass a partial JSON object and rely on the defaults for
/// everything they leave out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoneyFormatOptions {
    /// Currency symbol placed before the digits
    pub prefix: String,
    /// Text appended after the digits
    pub suffix: String,
    /// Separator inserted every three integer digits, from the right
    pub thousand_separator: String,
    /// Separator between the integer and fractional parts
    pub decimal_separator: String,
    /// Number of fractional digits to display (zero-padded)
    pub decimals: u32,
}

impl Default for MoneyFormatOptions {
    fn default() -> Self {
        Self {
            prefix: "¥".to_string(),
            suffix: String::new(),
            thousand_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimals: 2,
        }
    }
}

impl MoneyFormatOptions {
    /// Options with no prefix, suffix, or grouping (plain fixed-point text)
    pub fn plain() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            thousand_separator: String::new(),
            decimal_separator: ".".to_string(),
            decimals: 2,
        }
    }

    /// Override the currency prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Override the suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Override the thousands separator
    pub fn with_thousand_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousand_separator = separator.into();
        self
    }

    /// Override the decimal separator
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Override the number of fractional digits
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }
}
