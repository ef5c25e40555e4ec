//! Leg-pair enumeration against condition blocks and pair constraints.

use crate::config::SportConfig;
use crate::domain::{ConditionBlock, Leg, PairConstraints, RuleCondition};
use crate::extract::NameExtractor;

use super::matcher;

/// Enumerates the unordered leg pairs a rule applies to.
pub struct PairEvaluator<'a> {
    config: &'a SportConfig,
    extractor: &'a dyn NameExtractor,
}

impl<'a> PairEvaluator<'a> {
    pub fn new(config: &'a SportConfig, extractor: &'a dyn NameExtractor) -> Self {
        Self { config, extractor }
    }

    /// Every unordered pair `(i, j)` with `i < j` that satisfies the rule's
    /// condition block and all of its requested constraints.
    pub fn matching_pairs(
        &self,
        legs: &[Leg],
        block: &ConditionBlock,
        constraints: &PairConstraints,
    ) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..legs.len() {
            for j in (i + 1)..legs.len() {
                if self.pair_matches_block(&legs[i], &legs[j], block)
                    && self.check_constraints(&legs[i], &legs[j], constraints)
                {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    fn pair_matches_block(&self, a: &Leg, b: &Leg, block: &ConditionBlock) -> bool {
        match block {
            ConditionBlock::All(conditions) => self.pair_matches_all(a, b, conditions),
            ConditionBlock::Any(conditions) => self.pair_matches_any(a, b, conditions),
        }
    }

    /// ALL semantics: every condition is covered by at least one leg of the
    /// pair, and each leg satisfies at least one condition. A pair where all
    /// conditions land on a single leg does not count.
    fn pair_matches_all(&self, a: &Leg, b: &Leg, conditions: &[RuleCondition]) -> bool {
        if conditions.is_empty() {
            return false;
        }

        let mut a_hits_any = false;
        let mut b_hits_any = false;
        for condition in conditions {
            let a_hit = matcher::matches(a, condition, self.config);
            let b_hit = matcher::matches(b, condition, self.config);
            if !a_hit && !b_hit {
                return false;
            }
            a_hits_any |= a_hit;
            b_hits_any |= b_hit;
        }
        a_hits_any && b_hits_any
    }

    /// ANY semantics: both legs independently satisfy the same condition.
    fn pair_matches_any(&self, a: &Leg, b: &Leg, conditions: &[RuleCondition]) -> bool {
        conditions.iter().any(|condition| {
            matcher::matches(a, condition, self.config) && matcher::matches(b, condition, self.config)
        })
    }

    /// Evaluate the requested constraint predicates; all must hold.
    pub fn check_constraints(&self, a: &Leg, b: &Leg, constraints: &PairConstraints) -> bool {
        if constraints.same_game && a.game_id != b.game_id {
            return false;
        }
        if constraints.same_team && !self.same_team(a, b) {
            return false;
        }
        if constraints.opposite_teams && !self.opposite_teams(a, b) {
            return false;
        }
        if constraints.same_player && !self.same_player(a, b) {
            return false;
        }
        if constraints.different_players && !self.different_players(a, b) {
            return false;
        }
        if constraints.opposite_selections && !opposite_selections(a, b) {
            return false;
        }
        true
    }

    /// Same-game fallback: when either team fails to resolve, two legs in
    /// the same contest are assumed to concern overlapping teams.
    fn same_team(&self, a: &Leg, b: &Leg) -> bool {
        match (self.extractor.extract_team(a), self.extractor.extract_team(b)) {
            (Some(ta), Some(tb)) => ta == tb,
            _ => a.game_id == b.game_id,
        }
    }

    /// Both teams must resolve and differ; unresolved identity is a
    /// non-match (we cannot assert opposition without knowing the teams).
    fn opposite_teams(&self, a: &Leg, b: &Leg) -> bool {
        match (self.extractor.extract_team(a), self.extractor.extract_team(b)) {
            (Some(ta), Some(tb)) => ta != tb,
            _ => false,
        }
    }

    fn same_player(&self, a: &Leg, b: &Leg) -> bool {
        match (
            self.extractor.extract_player(a),
            self.extractor.extract_player(b),
        ) {
            (Some(pa), Some(pb)) => pa == pb,
            _ => false,
        }
    }

    /// Fail-open: unresolved identity counts as "different players", so an
    /// unparseable selection cannot keep a correlation rule from firing.
    fn different_players(&self, a: &Leg, b: &Leg) -> bool {
        match (
            self.extractor.extract_player(a),
            self.extractor.extract_player(b),
        ) {
            (Some(pa), Some(pb)) => pa != pb,
            _ => true,
        }
    }
}

/// Exactly one leg's selection carries an "over" token and the other an
/// "under" token, case-insensitively.
fn opposite_selections(a: &Leg, b: &Leg) -> bool {
    let a_over = a.selection_contains("over");
    let a_under = a.selection_contains("under");
    let b_over = b.selection_contains("over");
    let b_under = b.selection_contains("under");

    (a_over && !a_under && b_under && !b_over) || (a_under && !a_over && b_over && !b_under)
}
