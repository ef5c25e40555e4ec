//! Wire-format model for per-sport rule documents.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{MarketDefinition, ParlayRule, RuleKind};
use crate::error::ConfigError;

/// Per-venue limits layered on top of sport-level rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SportsbookPolicy {
    /// Maximum number of legs the book accepts in one parlay.
    #[serde(default)]
    pub max_legs: Option<usize>,
    /// Minimum decimal odds per leg. Legs with odds <= 0 (unpriced) are
    /// exempt from this check.
    #[serde(default)]
    pub min_odds_per_leg: Option<Decimal>,
    /// Market-key sets the book refuses to combine. A combination fires only
    /// when every key in the set is present among the parlay's legs.
    #[serde(default)]
    pub prohibited_combinations: Vec<Vec<String>>,
}

/// Immutable rule configuration for one sport.
///
/// Parsed once per sport id and shared read-only for the process lifetime
/// (see [`RuleConfigStore`](super::RuleConfigStore)).
#[derive(Debug, Deserialize)]
pub struct SportConfig {
    #[serde(default)]
    pub sport: String,
    pub market_definitions: HashMap<String, MarketDefinition>,
    pub parlay_rules: Vec<ParlayRule>,
    pub sportsbook_rules: HashMap<String, SportsbookPolicy>,
}

impl SportConfig {
    /// Resolve a market key to its broader group, when the market is known
    /// to this sport and its definition carries a group.
    #[must_use]
    pub fn market_group(&self, market_key: &str) -> Option<&str> {
        self.market_definitions
            .get(market_key)
            .and_then(|def| def.group.as_deref())
    }

    /// Look up a sportsbook policy, tolerating caller-side casing.
    #[must_use]
    pub fn policy(&self, book_id: &str) -> Option<&SportsbookPolicy> {
        self.sportsbook_rules
            .get(book_id)
            .or_else(|| self.sportsbook_rules.get(&book_id.to_uppercase()))
    }

    /// Parse and validate a rule document.
    pub fn parse(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for rule in &self.parlay_rules {
            if let RuleKind::Correlation { adjustment } = &rule.kind {
                if adjustment.multiplier <= Decimal::ZERO {
                    return Err(ConfigError::InvalidValue {
                        field: "correlation_adjustment.multiplier",
                        reason: format!(
                            "rule '{}' has non-positive multiplier {}",
                            rule.rule_id, adjustment.multiplier
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const MINIMAL: &str = r#"{
        "sport": "football",
        "market_definitions": {
            "moneyline": {"group": "GAME_LINE", "type": "moneyline"},
            "spread": {"group": "GAME_LINE", "type": "spread"}
        },
        "parlay_rules": [],
        "sportsbook_rules": {
            "DRAFTKINGS": {"max_legs": 20, "min_odds_per_leg": 1.1, "prohibited_combinations": []}
        }
    }"#;

    #[test]
    fn parses_minimal_document() {
        let config = SportConfig::parse(MINIMAL).unwrap();
        assert_eq!(config.sport, "football");
        assert_eq!(config.market_group("moneyline"), Some("GAME_LINE"));
        assert!(config.market_group("unknown_market").is_none());
    }

    #[test]
    fn policy_lookup_is_case_tolerant() {
        let config = SportConfig::parse(MINIMAL).unwrap();
        assert!(config.policy("DRAFTKINGS").is_some());
        assert_eq!(
            config.policy("draftkings").unwrap().min_odds_per_leg,
            Some(dec!(1.1))
        );
        assert!(config.policy("unknown_book").is_none());
    }

    #[test]
    fn missing_top_level_field_is_parse_error() {
        let err = SportConfig::parse(r#"{"sport": "football"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn non_positive_multiplier_is_rejected() {
        let doc = r#"{
            "sport": "football",
            "market_definitions": {},
            "parlay_rules": [{
                "ruleId": "CORR_BAD",
                "type": "CORRELATION",
                "conditions": {"all": [{"market_key": "a"}, {"market_key": "b"}]},
                "correlation_adjustment": {"multiplier": 0}
            }],
            "sportsbook_rules": {}
        }"#;
        let err = SportConfig::parse(doc).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
