//! Name-extraction port for team/player identity resolution.
//!
//! Resolving a structured team or player identity from a leg's free-text
//! selection is fragile by nature, so it is exposed as an injectable
//! capability rather than implemented inside the rule engine. Extraction
//! failure is never an error: constraint checks degrade to their documented
//! fallback behavior (see `engine::pairs`).

use std::fmt;

use crate::domain::Leg;

/// Team identifier - newtype for type safety.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamId(String);

impl TeamId {
    /// Create a new TeamId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the team ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TeamId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Player identifier - newtype for type safety.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new PlayerId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the player ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Best-effort resolution of team/player identity from a leg.
///
/// Implementations must be thread-safe (`Send + Sync`). Returning `None`
/// means "could not resolve", never "error": the engine's constraint checks
/// have explicit fallback policies for unresolved identities.
pub trait NameExtractor: Send + Sync {
    /// Extractor name for logging.
    fn name(&self) -> &'static str;

    /// Resolve the team the leg's selection concerns, if any.
    fn extract_team(&self, leg: &Leg) -> Option<TeamId>;

    /// Resolve the player the leg's selection concerns, if any.
    fn extract_player(&self, leg: &Leg) -> Option<PlayerId>;
}

/// Extractor that never resolves anything.
///
/// The default when no structured lookup is wired in: every constraint
/// check falls back to its documented unresolved-identity behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullExtractor;

impl NameExtractor for NullExtractor {
    fn name(&self) -> &'static str {
        "null"
    }

    fn extract_team(&self, _leg: &Leg) -> Option<TeamId> {
        None
    }

    fn extract_player(&self, _leg: &Leg) -> Option<PlayerId> {
        None
    }
}
