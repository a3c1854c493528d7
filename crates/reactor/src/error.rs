use std::path::PathBuf;

use thiserror::Error;
use zeolite_isotherm::DomainError;

/// Errors raised while advancing a reactor.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ReactorError {
    /// The reactor state violates its invariants and cannot be stepped.
    #[error("invalid reactor state: {reason}")]
    InvalidState { reason: &'static str },
}

/// Errors raised while loading or validating a configuration.
///
/// These are only produced before a run starts. An invalid `step_size` is
/// rejected while parsing and surfaces as [`ConfigError::Toml`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Toml(#[from] toml::de::Error),

    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
