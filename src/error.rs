//! Error types shared across the crate

use thiserror::Error;

/// Configuration access errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration value is absent or blank. The key is the
    /// full composite form (e.g. `ConnectionStrings:Postgres`) so the
    /// deployment can be fixed without reading source.
    #[error("Missing configuration value: {key}")]
    MissingKey { key: String },

    #[error("Invalid configuration document: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Value to hash or verify must not be empty")]
    EmptyInput,

    #[error("Cost factor {cost} is outside the valid range 4..=31")]
    CostOutOfRange { cost: u32 },

    #[error("Password hashing failed at cost {cost}: {source}")]
    HashFailed {
        cost: u32,
        #[source]
        source: bcrypt::BcryptError,
    },
}
