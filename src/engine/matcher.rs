//! Leg-vs-condition matching.

use crate::config::SportConfig;
use crate::domain::{Leg, RuleCondition};

/// Whether one leg satisfies one declarative condition.
///
/// A leg whose market is unknown to the sport's market definitions can never
/// satisfy a `market_group` condition (fail-closed). Absent or non-matching
/// fields are non-matches, never errors.
#[must_use]
pub fn matches(leg: &Leg, condition: &RuleCondition, config: &SportConfig) -> bool {
    match condition {
        RuleCondition::MarketKey { market_key } => leg.market_type == *market_key,
        RuleCondition::MarketKeys { market_keys } => market_keys.contains(&leg.market_type),
        RuleCondition::MarketGroup { market_group } => config
            .market_group(&leg.market_type)
            .is_some_and(|group| group == market_group),
        RuleCondition::Selection { selection } => leg.selection_contains(selection),
        RuleCondition::Selections { selections } => {
            selections.iter().any(|s| leg.selection_contains(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config() -> SportConfig {
        SportConfig::parse(
            r#"{
                "sport": "football",
                "market_definitions": {
                    "moneyline": {"group": "GAME_LINE", "type": "moneyline"},
                    "spread": {"group": "GAME_LINE", "type": "spread"},
                    "player_passing_yards": {"group": "PLAYER_PROP", "type": "over_under"}
                },
                "parlay_rules": [],
                "sportsbook_rules": {}
            }"#,
        )
        .unwrap()
    }

    fn leg(market: &str, selection: &str) -> Leg {
        Leg::new("g1", market, selection, dec!(1.90))
    }

    #[test]
    fn market_key_matches_exactly() {
        let cond = RuleCondition::MarketKey {
            market_key: "moneyline".into(),
        };
        assert!(matches(&leg("moneyline", "Cowboys"), &cond, &config()));
        assert!(!matches(&leg("spread", "Cowboys"), &cond, &config()));
    }

    #[test]
    fn market_keys_matches_membership() {
        let cond = RuleCondition::MarketKeys {
            market_keys: vec!["moneyline".into(), "spread".into()],
        };
        assert!(matches(&leg("spread", "Cowboys -3.5"), &cond, &config()));
        assert!(!matches(&leg("total", "Over 45.5"), &cond, &config()));
    }

    #[test]
    fn market_group_resolves_through_definitions() {
        let cond = RuleCondition::MarketGroup {
            market_group: "GAME_LINE".into(),
        };
        assert!(matches(&leg("moneyline", "Cowboys"), &cond, &config()));
        assert!(!matches(
            &leg("player_passing_yards", "QB Over 275.5"),
            &cond,
            &config()
        ));
    }

    #[test]
    fn unknown_market_fails_group_condition_closed() {
        let cond = RuleCondition::MarketGroup {
            market_group: "GAME_LINE".into(),
        };
        assert!(!matches(&leg("mystery_market", "Cowboys"), &cond, &config()));
    }

    #[test]
    fn selection_matches_substring_case_insensitive() {
        let cond = RuleCondition::Selection {
            selection: "over".into(),
        };
        assert!(matches(&leg("total", "Over 45.5"), &cond, &config()));
        assert!(!matches(&leg("total", "Under 45.5"), &cond, &config()));
    }

    #[test]
    fn selections_matches_any_substring() {
        let cond = RuleCondition::Selections {
            selections: vec!["cowboys".into(), "eagles".into()],
        };
        assert!(matches(&leg("moneyline", "Dallas Cowboys"), &cond, &config()));
        assert!(!matches(&leg("moneyline", "New York Giants"), &cond, &config()));
    }
}
