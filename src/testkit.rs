//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::config::RuleConfigStore;
use crate::domain::Leg;
use crate::extract::{NameExtractor, PlayerId, TeamId};

/// Table-backed extractor keyed by full selection text.
///
/// Selections not present in the table resolve to `None`, which exercises
/// the engine's unresolved-identity fallbacks.
#[derive(Default)]
pub struct TableExtractor {
    teams: HashMap<String, TeamId>,
    players: HashMap<String, PlayerId>,
}

impl TableExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a selection text to a team id.
    #[must_use]
    pub fn team(mut self, selection: &str, team: &str) -> Self {
        self.teams.insert(selection.into(), TeamId::new(team));
        self
    }

    /// Map a selection text to a player id.
    #[must_use]
    pub fn player(mut self, selection: &str, player: &str) -> Self {
        self.players.insert(selection.into(), PlayerId::new(player));
        self
    }
}

impl NameExtractor for TableExtractor {
    fn name(&self) -> &'static str {
        "table"
    }

    fn extract_team(&self, leg: &Leg) -> Option<TeamId> {
        self.teams.get(&leg.selection_name).cloned()
    }

    fn extract_player(&self, leg: &Leg) -> Option<PlayerId> {
        self.players.get(&leg.selection_name).cloned()
    }
}

/// A leg with the common fields filled in.
#[must_use]
pub fn leg(game: &str, market: &str, selection: &str, odds: Decimal) -> Leg {
    Leg::new(game, market, selection, odds)
}

/// Canonical football rule document used across integration tests.
///
/// Carries one exclusion per framing (related contingency and outcome
/// conflict), a soft-blocking exclusion, one correlation rule, and a
/// DRAFTKINGS policy.
#[must_use]
pub fn football_document() -> &'static str {
    r#"{
        "sport": "football",
        "market_definitions": {
            "moneyline": {"group": "GAME_LINE", "type": "moneyline", "period": "full_game"},
            "spread": {"group": "GAME_LINE", "type": "spread", "period": "full_game"},
            "total": {"group": "GAME_LINE", "type": "over_under", "period": "full_game"},
            "player_passing_yards": {"group": "PLAYER_PROP", "type": "over_under", "stat_unit": "yards"},
            "player_receiving_yards": {"group": "PLAYER_PROP", "type": "over_under", "stat_unit": "yards"}
        },
        "parlay_rules": [
            {
                "ruleId": "EXCLUSION_MONEYLINE_SPREAD_SAME_TEAM",
                "description": "Cannot combine moneyline and spread on the same team",
                "type": "EXCLUSION",
                "severity": "HARD_BLOCK",
                "conditions": {"all": [{"market_key": "moneyline"}, {"market_key": "spread"}]},
                "constraints": {"same_game": true, "same_team": true},
                "action": "DISALLOW"
            },
            {
                "ruleId": "EXCLUSION_OPPOSITE_PLAYER_PROPS",
                "description": "Cannot take both sides of the same player prop",
                "type": "EXCLUSION",
                "severity": "HARD_BLOCK",
                "conditions": {"any": [{"market_group": "PLAYER_PROP"}]},
                "constraints": {"same_player": true, "opposite_selections": true}
            },
            {
                "ruleId": "EXCLUSION_SPREAD_TOTAL_SAME_GAME",
                "description": "Spread and total in the same game are discouraged",
                "type": "EXCLUSION",
                "severity": "SOFT_BLOCK",
                "conditions": {"all": [{"market_key": "spread"}, {"market_key": "total"}]},
                "constraints": {"same_game": true}
            },
            {
                "ruleId": "CORRELATION_PASS_CATCH_SAME_GAME",
                "description": "Passing and receiving yards in the same game are correlated",
                "type": "CORRELATION",
                "conditions": {"all": [
                    {"market_key": "player_passing_yards"},
                    {"market_key": "player_receiving_yards"}
                ]},
                "constraints": {"same_game": true, "different_players": true},
                "correlation_adjustment": {"type": "MULTIPLICATIVE", "strength": "STRONG", "multiplier": 0.85}
            }
        ],
        "sportsbook_rules": {
            "DRAFTKINGS": {
                "max_legs": 20,
                "min_odds_per_leg": 1.20,
                "prohibited_combinations": [["moneyline", "total"]]
            }
        }
    }"#
}

/// An in-memory store pre-seeded with the football fixture document.
#[must_use]
pub fn football_store() -> Arc<RuleConfigStore> {
    let store = RuleConfigStore::in_memory();
    store.insert_document("football", football_document());
    Arc::new(store)
}
