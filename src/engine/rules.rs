//! Exclusion and correlation rule passes.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::SportConfig;
use crate::domain::{
    ConditionBlock, Leg, LegRef, ParlayRule, RuleKind, RuleType, Violation, ViolationTag,
};
use crate::extract::NameExtractor;

use super::pairs::PairEvaluator;

/// Apply every exclusion rule, emitting one violation per matching pair.
pub fn apply_exclusion_rules(
    legs: &[Leg],
    config: &SportConfig,
    extractor: &dyn NameExtractor,
) -> Vec<Violation> {
    let evaluator = PairEvaluator::new(config, extractor);
    let mut violations = Vec::new();

    for rule in &config.parlay_rules {
        let RuleKind::Exclusion { action } = &rule.kind else {
            continue;
        };

        for (i, j) in evaluator.matching_pairs(legs, &rule.conditions, &rule.constraints) {
            debug!(
                rule_id = %rule.rule_id,
                leg1 = i,
                leg2 = j,
                "exclusion rule triggered"
            );
            violations.push(Violation {
                rule_id: rule.rule_id.clone(),
                rule_type: RuleType::Exclusion,
                severity: rule.severity,
                description: rule.description.clone(),
                leg1_ref: Some(LegRef::new(i, &legs[i])),
                leg2_ref: Some(LegRef::new(j, &legs[j])),
                sportsbook_specific: false,
                correlation_multiplier: None,
                tag: exclusion_tag(rule),
                suggested_action: action.clone(),
            });
        }
    }

    violations
}

/// Apply every correlation rule (ALL semantics only), accumulating the tax.
///
/// The tax starts at 1.0 and is multiplied once per matching pair; the final
/// value is a commutative product, so rule order never matters.
pub fn evaluate_correlation_rules(
    legs: &[Leg],
    config: &SportConfig,
    extractor: &dyn NameExtractor,
) -> (Vec<Violation>, Decimal) {
    let evaluator = PairEvaluator::new(config, extractor);
    let mut violations = Vec::new();
    let mut tax = Decimal::ONE;

    for rule in &config.parlay_rules {
        let RuleKind::Correlation { adjustment } = &rule.kind else {
            continue;
        };
        // Correlation rules pair two distinct condition roles; ANY blocks
        // have no meaning here and contribute nothing.
        if !matches!(rule.conditions, ConditionBlock::All(_)) {
            continue;
        }

        for (i, j) in evaluator.matching_pairs(legs, &rule.conditions, &rule.constraints) {
            tax *= adjustment.multiplier;
            debug!(
                rule_id = %rule.rule_id,
                leg1 = i,
                leg2 = j,
                multiplier = %adjustment.multiplier,
                tax = %tax,
                "correlation rule triggered"
            );
            violations.push(Violation {
                rule_id: rule.rule_id.clone(),
                rule_type: RuleType::Correlation,
                severity: rule.severity,
                description: rule.description.clone(),
                leg1_ref: Some(LegRef::new(i, &legs[i])),
                leg2_ref: Some(LegRef::new(j, &legs[j])),
                sportsbook_specific: false,
                correlation_multiplier: Some(adjustment.multiplier),
                tag: ViolationTag::PricingModelViolation,
                suggested_action: None,
            });
        }
    }

    (violations, tax)
}

/// Exclusions framed as direct outcome conflicts are logical contradictions;
/// everything else is a related contingency.
fn exclusion_tag(rule: &ParlayRule) -> ViolationTag {
    if rule.is_outcome_conflict() {
        ViolationTag::LogicalContradiction
    } else {
        ViolationTag::RelatedContingency
    }
}
