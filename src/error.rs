//! Error types for configuration and startup.

use thiserror::Error;

/// Errors surfaced while loading configuration or wiring the helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// Form helpers were requested but compiled out.
    #[error("Form helpers unavailable: crate built without the `forms` feature")]
    FormSupportDisabled,

    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },

    /// A TOML configuration document failed to parse.
    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
