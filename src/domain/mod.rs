//! Sport-agnostic domain types for parlay validation.

mod leg;
mod market;
mod rule;
mod violation;

pub use leg::{Leg, LegRef};
pub use market::MarketDefinition;
pub use rule::{
    ConditionBlock, CorrelationAdjustment, PairConstraints, ParlayRule, RuleCondition, RuleKind,
    Severity,
};
pub use violation::{RuleType, ValidationResult, Violation, ViolationTag};
