//! Closed vocabularies
//!
//! Every categorical field of the data model is drawn from a fixed set of
//! labels. The generator and the filters must agree on these labels, so each
//! set is a Rust enum implementing [`Vocabulary`] through the
//! `#[derive(Vocabulary)]` macro.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::PopHealthError;

/// A closed set of string labels backed by a unit-only enum
pub trait Vocabulary:
    Sized + Copy + Eq + Display + FromStr<Err = PopHealthError> + 'static
{
    /// Human readable name of the vocabulary, used in error messages
    const NAME: &'static str;

    /// The "All ..." value that disables a filter on this vocabulary
    const SENTINEL: &'static str;

    /// Every member, in declaration order
    const VARIANTS: &'static [Self];

    /// The display label of this member
    fn label(&self) -> &'static str;

    /// Whether `value` is this vocabulary's sentinel or any other "All ..." string
    #[must_use]
    fn is_sentinel(value: &str) -> bool {
        let value = value.trim();
        value == Self::SENTINEL || value == "All" || value.starts_with("All ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::{ReferralUrgency, RiskLevel};

    #[test]
    fn test_round_trip_through_label() {
        for level in RiskLevel::VARIANTS {
            assert_eq!(level.label().parse::<RiskLevel>().ok(), Some(*level));
        }
    }

    #[test]
    fn test_sentinels() {
        assert!(RiskLevel::is_sentinel("All Levels"));
        assert!(RiskLevel::is_sentinel("All"));
        assert!(RiskLevel::is_sentinel(" All Levels "));
        assert!(!RiskLevel::is_sentinel("Critical"));
        assert!(!RiskLevel::is_sentinel("Allergy Alert"));
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = "Severe".parse::<RiskLevel>().unwrap_err();
        assert!(matches!(err, PopHealthError::UnknownLabel { label, .. } if label == "Severe"));
    }

    #[test]
    fn test_labels_with_punctuation() {
        assert_eq!(
            "STAT (24h)".parse::<ReferralUrgency>().ok(),
            Some(ReferralUrgency::Stat)
        );
        assert_eq!(ReferralUrgency::Urgent.to_string(), "Urgent (72h)");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&RiskLevel::Moderate).unwrap();
        assert_eq!(json, "\"Moderate\"");
        let parsed: RiskLevel = serde_json::from_str("\"Critical\"").unwrap();
        assert_eq!(parsed, RiskLevel::Critical);
        assert!(serde_json::from_str::<RiskLevel>("\"Severe\"").is_err());
    }
}
