//! Sportsbook policy checks.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{SportConfig, SportsbookPolicy};
use crate::domain::{Leg, LegRef, RuleType, Severity, Violation, ViolationTag};

/// Enforce a named sportsbook's policy limits.
///
/// An unknown book id is a warning, not a failure: the book-specific checks
/// are skipped and validation continues with sport-level rules only.
pub fn check(legs: &[Leg], book_id: &str, config: &SportConfig) -> (Vec<Violation>, Vec<String>) {
    let Some(policy) = config.policy(book_id) else {
        warn!(book = %book_id, "unknown sportsbook, skipping policy checks");
        return (
            Vec::new(),
            vec![format!(
                "unknown sportsbook '{book_id}', default policy applied"
            )],
        );
    };

    let mut violations = Vec::new();

    if let Some(max_legs) = policy.max_legs {
        if legs.len() > max_legs {
            debug!(book = %book_id, legs = legs.len(), max_legs, "leg count exceeds book limit");
            violations.push(parlay_violation(
                "MAX_LEGS_EXCEEDED",
                format!(
                    "{book_id} allows at most {max_legs} legs per parlay, got {}",
                    legs.len()
                ),
            ));
        }
    }

    if let Some(min_odds) = policy.min_odds_per_leg {
        for (index, leg) in legs.iter().enumerate() {
            // Odds <= 0 means the leg is not priced yet; nothing to check.
            if leg.odds_decimal > Decimal::ZERO && leg.odds_decimal < min_odds {
                violations.push(Violation {
                    rule_id: "MIN_ODDS_VIOLATION".into(),
                    rule_type: RuleType::SportsbookPolicy,
                    severity: Severity::HardBlock,
                    description: format!(
                        "leg '{}' at odds {} is below {book_id}'s minimum of {min_odds}",
                        leg.selection_name, leg.odds_decimal
                    ),
                    leg1_ref: Some(LegRef::new(index, leg)),
                    leg2_ref: None,
                    sportsbook_specific: true,
                    correlation_multiplier: None,
                    tag: ViolationTag::RelatedContingency,
                    suggested_action: None,
                });
            }
        }
    }

    for combination in &policy.prohibited_combinations {
        if !combination.is_empty() && combination_present(legs, combination) {
            violations.push(parlay_violation(
                "SPORTSBOOK_PROHIBITED",
                format!(
                    "{book_id} does not allow combining markets: {}",
                    combination.join(" + ")
                ),
            ));
        }
    }

    (violations, Vec::new())
}

/// Every market key in the combination appears among the legs.
fn combination_present(legs: &[Leg], combination: &[String]) -> bool {
    combination
        .iter()
        .all(|key| legs.iter().any(|leg| leg.market_type == *key))
}

/// A hard-blocking violation scoped to the whole parlay.
fn parlay_violation(rule_id: &str, description: String) -> Violation {
    Violation {
        rule_id: rule_id.into(),
        rule_type: RuleType::SportsbookPolicy,
        severity: Severity::HardBlock,
        description,
        leg1_ref: None,
        leg2_ref: None,
        sportsbook_specific: true,
        correlation_multiplier: None,
        tag: ViolationTag::RelatedContingency,
        suggested_action: None,
    }
}
