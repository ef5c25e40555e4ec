//! Parlay rule types.
//!
//! The wire format tags rules with a `type` string (`"EXCLUSION"` /
//! `"CORRELATION"`); parsing resolves that tag into the closed [`RuleKind`]
//! sum type once, so evaluation switches exhaustively over variants instead
//! of re-inspecting strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How severe a triggered rule is for the parlay as a whole.
///
/// Only [`Severity::HardBlock`] makes a parlay invalid; softer severities are
/// carried through in the result for the caller to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    HardBlock,
    SoftBlock,
    Warning,
}

/// One declarative condition a leg can satisfy.
///
/// Selection conditions match case-insensitively on substring containment;
/// market conditions match keys exactly or through the market's group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RuleCondition {
    /// Exact market key equality.
    MarketKey { market_key: String },
    /// Membership in a set of market keys.
    MarketKeys { market_keys: Vec<String> },
    /// The leg's market resolves to this group via the market definitions.
    MarketGroup { market_group: String },
    /// Case-insensitive substring of the selection text.
    Selection { selection: String },
    /// Any of these substrings of the selection text.
    Selections { selections: Vec<String> },
}

/// A rule's condition block: ALL or ANY semantics over a condition list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionBlock {
    /// The conditions must be distributed across the two legs of a pair so
    /// that every condition is covered and each leg satisfies at least one.
    All(Vec<RuleCondition>),
    /// Both legs must independently satisfy the same condition from the list
    /// (e.g. Over vs Under on the same market type).
    Any(Vec<RuleCondition>),
}

impl ConditionBlock {
    /// The conditions inside the block, regardless of semantics.
    #[must_use]
    pub fn conditions(&self) -> &[RuleCondition] {
        match self {
            Self::All(c) | Self::Any(c) => c,
        }
    }
}

/// Relational predicates over a leg pair. All requested predicates must hold
/// (logical AND) for the pair to count as a rule instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PairConstraints {
    pub same_game: bool,
    pub same_team: bool,
    pub opposite_teams: bool,
    pub same_player: bool,
    pub different_players: bool,
    pub opposite_selections: bool,
}

/// Price adjustment attached to a correlation rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CorrelationAdjustment {
    /// Adjustment family, e.g. `"MULTIPLICATIVE"`. Descriptive only.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Correlation strength label, e.g. `"STRONG"`. Descriptive only.
    #[serde(default)]
    pub strength: Option<String>,
    /// Factor multiplied into the parlay's correlation tax per instance.
    pub multiplier: Decimal,
}

/// Closed sum over rule behaviors, resolved once at config-load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// Triggering pairs make the parlay impermissible.
    Exclusion {
        /// Declared remediation, e.g. `"DISALLOW"`. Surfaced to callers as
        /// the violation's suggested action.
        action: Option<String>,
    },
    /// Triggering pairs adjust the parlay's fair price.
    Correlation { adjustment: CorrelationAdjustment },
}

impl RuleKind {
    /// The wire-format tag for this kind.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Exclusion { .. } => "EXCLUSION",
            Self::Correlation { .. } => "CORRELATION",
        }
    }
}

/// A single sport-level parlay rule from the configuration document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawRule")]
pub struct ParlayRule {
    pub rule_id: String,
    pub description: String,
    pub severity: Severity,
    pub kind: RuleKind,
    pub conditions: ConditionBlock,
    pub constraints: PairConstraints,
}

impl ParlayRule {
    /// The correlation multiplier, when this is a correlation rule.
    #[must_use]
    pub fn correlation_multiplier(&self) -> Option<Decimal> {
        match &self.kind {
            RuleKind::Correlation { adjustment } => Some(adjustment.multiplier),
            RuleKind::Exclusion { .. } => None,
        }
    }

    /// True when the rule is framed as a direct outcome conflict: ANY
    /// semantics (both sides of one market) or an opposite-selections
    /// constraint. Such exclusions are tagged as logical contradictions.
    #[must_use]
    pub fn is_outcome_conflict(&self) -> bool {
        matches!(self.conditions, ConditionBlock::Any(_)) || self.constraints.opposite_selections
    }
}

/// Wire-format rule before the `type` tag is resolved.
#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(rename = "ruleId")]
    rule_id: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    rule_type: String,
    #[serde(default)]
    severity: Option<Severity>,
    conditions: ConditionBlock,
    #[serde(default)]
    constraints: PairConstraints,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    correlation_adjustment: Option<CorrelationAdjustment>,
}

impl TryFrom<RawRule> for ParlayRule {
    type Error = ConfigError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        let (kind, default_severity) = match raw.rule_type.as_str() {
            "EXCLUSION" => {
                if raw.correlation_adjustment.is_some() {
                    return Err(ConfigError::InvalidValue {
                        field: "correlation_adjustment",
                        reason: format!(
                            "exclusion rule '{}' must not carry a correlation adjustment",
                            raw.rule_id
                        ),
                    });
                }
                (RuleKind::Exclusion { action: raw.action }, Severity::HardBlock)
            }
            "CORRELATION" => {
                let adjustment =
                    raw.correlation_adjustment
                        .ok_or(ConfigError::MissingField {
                            field: "correlation_adjustment",
                        })?;
                (RuleKind::Correlation { adjustment }, Severity::Warning)
            }
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "type",
                    reason: format!("unknown rule type '{other}' on rule '{}'", raw.rule_id),
                })
            }
        };

        Ok(Self {
            rule_id: raw.rule_id,
            description: raw.description,
            severity: raw.severity.unwrap_or(default_severity),
            kind,
            conditions: raw.conditions,
            constraints: raw.constraints,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(json: &str) -> Result<ParlayRule, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn exclusion_rule_parses_with_default_severity() {
        let rule = parse(
            r#"{
                "ruleId": "EXCLUSION_ML_SPREAD",
                "description": "Moneyline and spread on the same team",
                "type": "EXCLUSION",
                "conditions": {"all": [{"market_key": "moneyline"}, {"market_key": "spread"}]},
                "constraints": {"same_game": true, "same_team": true},
                "action": "DISALLOW"
            }"#,
        )
        .unwrap();

        assert_eq!(rule.severity, Severity::HardBlock);
        assert_eq!(rule.kind.type_name(), "EXCLUSION");
        assert!(rule.constraints.same_team);
        assert!(!rule.constraints.opposite_selections);
        assert_eq!(rule.conditions.conditions().len(), 2);
    }

    #[test]
    fn correlation_rule_parses_multiplier() {
        let rule = parse(
            r#"{
                "ruleId": "CORR_QB_WR",
                "description": "QB passing and WR receiving",
                "type": "CORRELATION",
                "conditions": {"all": [
                    {"market_key": "player_passing_yards"},
                    {"market_key": "player_receiving_yards"}
                ]},
                "constraints": {"same_game": true, "different_players": true},
                "correlation_adjustment": {"type": "MULTIPLICATIVE", "strength": "STRONG", "multiplier": 0.85}
            }"#,
        )
        .unwrap();

        assert_eq!(rule.severity, Severity::Warning);
        assert_eq!(rule.correlation_multiplier(), Some(dec!(0.85)));
    }

    #[test]
    fn correlation_rule_without_adjustment_is_rejected() {
        let err = parse(
            r#"{
                "ruleId": "CORR_BROKEN",
                "type": "CORRELATION",
                "conditions": {"all": [{"market_key": "a"}, {"market_key": "b"}]}
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("correlation_adjustment"));
    }

    #[test]
    fn unknown_rule_type_is_rejected() {
        let err = parse(
            r#"{
                "ruleId": "R",
                "type": "BONUS",
                "conditions": {"any": [{"market_key": "a"}]}
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown rule type"));
    }

    #[test]
    fn any_block_marks_outcome_conflict() {
        let rule = parse(
            r#"{
                "ruleId": "EXCL_OVER_UNDER",
                "type": "EXCLUSION",
                "conditions": {"any": [{"market_group": "PLAYER_PROP"}]},
                "constraints": {"same_player": true, "opposite_selections": true}
            }"#,
        )
        .unwrap();
        assert!(rule.is_outcome_conflict());
    }

    #[test]
    fn explicit_severity_overrides_default() {
        let rule = parse(
            r#"{
                "ruleId": "SOFT",
                "type": "EXCLUSION",
                "severity": "SOFT_BLOCK",
                "conditions": {"all": [{"market_key": "a"}, {"market_key": "b"}]}
            }"#,
        )
        .unwrap();
        assert_eq!(rule.severity, Severity::SoftBlock);
    }
}
