//! Markup rule models and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Amount;
use crate::error::{Error, Result};

/// How a supplier's base price is increased before a store sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupType {
    /// Flat amount added to the base price
    Fixed,
    /// Percentage of the base price (whole number, `10` means 10%)
    Percent,
}

/// Markup rule applied to a base price
///
/// Loaded from the platform's supplier/material pricing records (stored as
/// JSON, hence the camelCase wire names) and consumed per calculation call.
/// Immutable for the duration of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupRule {
    /// Rule type (fixed amount or percentage)
    #[serde(rename = "type")]
    pub markup_type: MarkupType,
    /// Markup amount (fixed) or markup percentage number (percent)
    pub value: Amount,
    /// Lower clamp on the computed markup; only meaningful for percent rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_markup: Option<Amount>,
    /// Upper clamp on the computed markup; only meaningful for percent rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_markup: Option<Amount>,
}

impl MarkupRule {
    /// Create a fixed markup rule
    pub fn fixed(value: Amount) -> Self {
        Self {
            markup_type: MarkupType::Fixed,
            value,
            min_markup: None,
            max_markup: None,
        }
    }

    /// Create a percent markup rule without clamps
    pub fn percent(value: Amount) -> Self {
        Self {
            markup_type: MarkupType::Percent,
            value,
            min_markup: None,
            max_markup: None,
        }
    }

    /// Set the lower clamp
    pub fn with_min_markup(mut self, min: Amount) -> Self {
        self.min_markup = Some(min);
        self
    }

    /// Set the upper clamp
    pub fn with_max_markup(mut self, max: Amount) -> Self {
        self.max_markup = Some(max);
        self
    }

    /// Check rule consistency
    ///
    /// Requires `value >= 0` and, when both clamps are present,
    /// `min_markup <= max_markup`. The markup calculator itself does not call
    /// this; it is for boundary code that ingests untrusted rule records.
    pub fn validate(&self) -> Result<()> {
        if self.value < Decimal::ZERO {
            return Err(Error::InvalidMarkupRule(format!(
                "markup value must be non-negative, got {}",
                self.value
            )));
        }
        if let (Some(min), Some(max)) = (self.min_markup, self.max_markup) {
            if min > max {
                return Err(Error::InvalidMarkupRule(format!(
                    "minMarkup {} exceeds maxMarkup {}",
                    min, max
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserializes_platform_rule_records() {
        let rule: MarkupRule =
            serde_json::from_str(r#"{"type":"percent","value":10,"minMarkup":5}"#).unwrap();
        assert_eq!(rule.markup_type, MarkupType::Percent);
        assert_eq!(rule.value, dec!(10));
        assert_eq!(rule.min_markup, Some(dec!(5)));
        assert_eq!(rule.max_markup, None);

        let fixed: MarkupRule = serde_json::from_str(r#"{"type":"fixed","value":"15.5"}"#).unwrap();
        assert_eq!(fixed.markup_type, MarkupType::Fixed);
        assert_eq!(fixed.value, dec!(15.5));
    }

    #[test]
    fn round_trips_through_json() {
        let rule = MarkupRule::percent(dec!(8))
            .with_min_markup(dec!(1))
            .with_max_markup(dec!(50));
        let json = serde_json::to_string(&rule).unwrap();
        let back: MarkupRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
        // clamp fields are omitted entirely when unset
        assert!(!serde_json::to_string(&MarkupRule::fixed(dec!(2)))
            .unwrap()
            .contains("minMarkup"));
    }

    #[test]
    fn validate_rejects_inconsistent_rules() {
        assert!(MarkupRule::percent(dec!(10)).validate().is_ok());
        assert!(MarkupRule::fixed(dec!(0)).validate().is_ok());
        assert!(MarkupRule::percent(dec!(-1)).validate().is_err());
        assert!(MarkupRule::percent(dec!(5))
            .with_min_markup(dec!(100))
            .with_max_markup(dec!(10))
            .validate()
            .is_err());
        assert!(MarkupRule::percent(dec!(5))
            .with_min_markup(dec!(10))
            .with_max_markup(dec!(100))
            .validate()
            .is_ok());
    }
}
