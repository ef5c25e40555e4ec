//! Parlayguard - parlay rule validation and correlation pricing.
//!
//! This crate validates a candidate multi-selection wager (a parlay) against
//! a sport-specific, data-driven rule set and computes a multiplicative price
//! adjustment for legs whose outcomes are statistically related.
//!
//! # Architecture
//!
//! Validation is a single synchronous pipeline over the parlay's legs:
//!
//! - **[`config`]** - Per-sport rule documents, parsed once and cached for
//!   the process lifetime (`RuleConfigStore`).
//! - **[`engine`]** - Evaluation passes: condition matching, leg-pair
//!   enumeration, exclusion and correlation rules, sportsbook policy.
//! - **[`extract`]** - Injectable name-extraction capability for resolving
//!   team/player identity from free-text selections.
//! - **[`validator`]** - The public facade, [`ParlayValidator`].
//!
//! Exclusion rules make a parlay impermissible; correlation rules leave it
//! valid but multiply a correlation tax into its fair price. Sportsbook
//! policies layer venue limits (leg counts, minimum odds, prohibited market
//! combinations) on top.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rust_decimal_macros::dec;
//! use parlayguard::config::RuleConfigStore;
//! use parlayguard::domain::Leg;
//! use parlayguard::validator::ParlayValidator;
//!
//! let store = RuleConfigStore::in_memory();
//! store.insert_document("football", r#"{
//!     "sport": "football",
//!     "market_definitions": {},
//!     "parlay_rules": [],
//!     "sportsbook_rules": {}
//! }"#);
//!
//! let validator = ParlayValidator::new(Arc::new(store));
//! let legs = vec![
//!     Leg::new("g1", "moneyline", "Dallas Cowboys", dec!(1.75)),
//!     Leg::new("g2", "moneyline", "Kansas City Chiefs", dec!(1.60)),
//! ];
//!
//! let result = validator.validate(&legs, "football", "DRAFTKINGS");
//! assert!(result.is_valid);
//! ```

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod extract;
pub mod validator;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use config::{RuleConfigStore, SportConfig, SportsbookPolicy};
pub use domain::{Leg, ValidationResult, Violation};
pub use error::{ConfigError, Error, Result};
pub use validator::ParlayValidator;
