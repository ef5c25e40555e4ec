//! Validation output types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::leg::LegRef;
use super::rule::Severity;

/// Which evaluation pass produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    Exclusion,
    Correlation,
    SportsbookPolicy,
}

/// Coarse classification of why a violation fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationTag {
    /// The legs cannot jointly win (opposite selections, mutual exclusion).
    LogicalContradiction,
    /// The legs are statistically related; the price needs adjusting.
    PricingModelViolation,
    /// The combination is disallowed as a related contingency or by policy.
    RelatedContingency,
}

/// One triggered rule instance or policy breach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub rule_id: String,
    pub rule_type: RuleType,
    pub severity: Severity,
    pub description: String,
    /// First leg of the offending pair, when the violation is pair-scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg1_ref: Option<LegRef>,
    /// Second leg of the offending pair, when the violation is pair-scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg2_ref: Option<LegRef>,
    /// True only for violations emitted by the sportsbook policy pass.
    pub sportsbook_specific: bool,
    /// The multiplier applied for this instance, for correlation violations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_multiplier: Option<Decimal>,
    pub tag: ViolationTag,
    /// The rule's declared remediation, e.g. `"DISALLOW"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}

impl Violation {
    /// True when this violation alone makes the parlay invalid.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::HardBlock
    }
}

/// The final outcome of validating one parlay.
///
/// A pure function of the legs, sport, sportsbook, and the cached sport
/// configuration; no state carries over between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff no violation carries `HARD_BLOCK` severity.
    pub is_valid: bool,
    pub violations: Vec<Violation>,
    pub warnings: Vec<String>,
    /// Product of every triggered correlation instance's multiplier.
    /// `1.0` when no correlation rule fired.
    pub correlation_tax_multiplier: Decimal,
    pub sport: String,
}

impl ValidationResult {
    /// A failed result that never reached rule evaluation (config load
    /// failure or too few legs).
    pub(crate) fn rejected_early(sport: impl Into<String>, warning: String) -> Self {
        Self {
            is_valid: false,
            violations: Vec::new(),
            warnings: vec![warning],
            correlation_tax_multiplier: Decimal::ONE,
            sport: sport.into(),
        }
    }

    /// Description of the first hard-blocking violation, if any.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        self.violations
            .iter()
            .find(|v| v.is_blocking())
            .map(|v| v.description.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(severity: Severity, description: &str) -> Violation {
        Violation {
            rule_id: "R1".into(),
            rule_type: RuleType::Exclusion,
            severity,
            description: description.into(),
            leg1_ref: None,
            leg2_ref: None,
            sportsbook_specific: false,
            correlation_multiplier: None,
            tag: ViolationTag::RelatedContingency,
            suggested_action: None,
        }
    }

    #[test]
    fn rejection_reason_picks_first_hard_block() {
        let result = ValidationResult {
            is_valid: false,
            violations: vec![
                violation(Severity::Warning, "soft"),
                violation(Severity::HardBlock, "first hard"),
                violation(Severity::HardBlock, "second hard"),
            ],
            warnings: vec![],
            correlation_tax_multiplier: Decimal::ONE,
            sport: "football".into(),
        };
        assert_eq!(result.rejection_reason(), Some("first hard"));
    }

    #[test]
    fn rejection_reason_none_without_hard_block() {
        let result = ValidationResult {
            is_valid: true,
            violations: vec![violation(Severity::SoftBlock, "soft")],
            warnings: vec![],
            correlation_tax_multiplier: Decimal::ONE,
            sport: "football".into(),
        };
        assert!(result.rejection_reason().is_none());
    }
}
