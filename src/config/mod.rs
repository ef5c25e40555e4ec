//! Rule configuration: wire-format model and the compute-once store.

mod model;
mod store;

pub use model::{SportConfig, SportsbookPolicy};
pub use store::RuleConfigStore;
