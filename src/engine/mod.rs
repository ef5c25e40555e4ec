//! Rule evaluation passes over a parlay's legs.

pub mod matcher;
pub mod pairs;
pub mod policy;
pub mod rules;

pub use pairs::PairEvaluator;
