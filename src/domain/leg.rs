//! Parlay leg input types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced selection within a parlay.
///
/// Legs are supplied by the caller (typically an odds-ingestion subsystem)
/// and are never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Identifier of the contest the selection belongs to.
    pub game_id: String,
    /// Market key, e.g. `"moneyline"` or `"player_passing_yards"`.
    pub market_type: String,
    /// Free-text selection, e.g. `"Dallas Cowboys -3.5"`.
    pub selection_name: String,
    /// Decimal odds for this leg. Zero or negative means "not priced yet";
    /// such legs are exempt from minimum-odds policy checks.
    pub odds_decimal: Decimal,
    /// Optional line (spread/total threshold) attached to the selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Decimal>,
}

impl Leg {
    /// Create a leg without a line.
    pub fn new(
        game_id: impl Into<String>,
        market_type: impl Into<String>,
        selection_name: impl Into<String>,
        odds_decimal: Decimal,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            market_type: market_type.into(),
            selection_name: selection_name.into(),
            odds_decimal,
            line: None,
        }
    }

    /// Attach a line to this leg.
    #[must_use]
    pub fn with_line(mut self, line: Decimal) -> Self {
        self.line = Some(line);
        self
    }

    /// Case-insensitive substring test against the selection text.
    #[must_use]
    pub fn selection_contains(&self, needle: &str) -> bool {
        self.selection_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

/// Back-reference from a violation to a leg in the caller's slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegRef {
    /// Index into the leg slice passed to `validate`.
    pub index: usize,
    /// Market key of the referenced leg, for human-readable context.
    pub market_type: String,
}

impl LegRef {
    pub(crate) fn new(index: usize, leg: &Leg) -> Self {
        Self {
            index,
            market_type: leg.market_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn selection_contains_is_case_insensitive() {
        let leg = Leg::new("g1", "total", "Over 45.5", dec!(1.90));
        assert!(leg.selection_contains("over"));
        assert!(leg.selection_contains("OVER 45.5"));
        assert!(!leg.selection_contains("under"));
    }

    #[test]
    fn with_line_sets_line() {
        let leg = Leg::new("g1", "spread", "Cowboys -3.5", dec!(1.90)).with_line(dec!(-3.5));
        assert_eq!(leg.line, Some(dec!(-3.5)));
    }

    #[test]
    fn leg_deserializes_without_line() {
        let leg: Leg = serde_json::from_str(
            r#"{"game_id":"g1","market_type":"moneyline","selection_name":"Cowboys","odds_decimal":1.75}"#,
        )
        .unwrap();
        assert_eq!(leg.market_type, "moneyline");
        assert_eq!(leg.odds_decimal, dec!(1.75));
        assert!(leg.line.is_none());
    }
}
