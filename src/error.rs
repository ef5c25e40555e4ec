use thiserror::Error;

/// Configuration-related errors with structured variants.
///
/// The engine treats every variant except [`ConfigError::NotFound`] as an
/// invalid document: callers surface both as a failed validation result
/// rather than a crash.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no rule configuration for sport '{sport}'")]
    NotFound { sport: String },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_json::Error),
}

impl ConfigError {
    /// True when the sport simply has no configuration, as opposed to a
    /// document that exists but cannot be used.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
