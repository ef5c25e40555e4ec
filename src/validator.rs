//! Public validation facade.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::RuleConfigStore;
use crate::domain::{Leg, ValidationResult};
use crate::engine::{policy, rules};
use crate::extract::{NameExtractor, NullExtractor};

/// Validates candidate parlays against a sport's rule set and computes the
/// correlation price adjustment.
///
/// A single synchronous pass per call: load config, exclusion rules,
/// correlation rules, sportsbook policy, aggregate. Inputs are never
/// mutated and no state carries over between calls.
pub struct ParlayValidator {
    store: Arc<RuleConfigStore>,
    extractor: Arc<dyn NameExtractor>,
}

impl ParlayValidator {
    /// A validator with no structured name extraction wired in; constraint
    /// checks rely on their documented fallbacks.
    pub fn new(store: Arc<RuleConfigStore>) -> Self {
        Self::with_extractor(store, Arc::new(NullExtractor))
    }

    /// A validator using the given name-extraction capability.
    pub fn with_extractor(store: Arc<RuleConfigStore>, extractor: Arc<dyn NameExtractor>) -> Self {
        debug!(extractor = extractor.name(), "parlay validator initialized");
        Self { store, extractor }
    }

    /// Validate a parlay for a sport and sportsbook.
    ///
    /// Config-load failures and parlays of fewer than two legs short-circuit
    /// to an invalid result with an explanatory warning; they never panic or
    /// surface as errors.
    pub fn validate(&self, legs: &[Leg], sport: &str, sportsbook: &str) -> ValidationResult {
        let config = match self.store.load(sport) {
            Ok(config) => config,
            Err(e) => {
                warn!(sport = %sport, error = %e, "parlay rejected: config unavailable");
                return ValidationResult::rejected_early(
                    sport,
                    format!("failed to load {sport} rules: {e}"),
                );
            }
        };

        if legs.is_empty() {
            return ValidationResult::rejected_early(sport, "parlay contains no legs".into());
        }
        if legs.len() < 2 {
            return ValidationResult::rejected_early(
                sport,
                "parlay must contain at least 2 legs".into(),
            );
        }

        let mut violations = rules::apply_exclusion_rules(legs, &config, self.extractor.as_ref());

        let (correlation_violations, tax) =
            rules::evaluate_correlation_rules(legs, &config, self.extractor.as_ref());
        violations.extend(correlation_violations);

        let (policy_violations, warnings) = policy::check(legs, sportsbook, &config);
        violations.extend(policy_violations);

        let is_valid = !violations.iter().any(|v| v.is_blocking());
        debug!(
            sport = %sport,
            book = %sportsbook,
            legs = legs.len(),
            violations = violations.len(),
            is_valid,
            tax = %tax,
            "parlay validated"
        );

        ValidationResult {
            is_valid,
            violations,
            warnings,
            correlation_tax_multiplier: tax,
            sport: sport.to_string(),
        }
    }

    /// Convenience wrapper returning a pass/fail flag and a reason string.
    pub fn is_parlay_valid(&self, legs: &[Leg], sport: &str, sportsbook: &str) -> (bool, String) {
        let result = self.validate(legs, sport, sportsbook);
        match result.rejection_reason() {
            Some(reason) => (false, reason.to_string()),
            None if result.is_valid => (true, "Valid parlay".to_string()),
            // Rejected before rule evaluation: the warning is the reason.
            None => (
                false,
                result
                    .warnings
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "invalid parlay".to_string()),
            ),
        }
    }

    /// Pre-load and cache a sport's configuration.
    pub fn warm(&self, sport: &str) -> crate::error::Result<()> {
        self.store.load(sport)?;
        Ok(())
    }
}
