use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the codec does with JSON fields the schema does not model.
#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldPolicy {
    /// Drop them silently.
    Ignore,
    /// Drop them and log a warning for each.
    #[default]
    Warn,
    /// Fail decoding.
    Deny,
}

///
/// Settings of the message codec.
///
/// Can be read from a TOML file:
///
/// ```toml
/// unknown_fields = "deny"
/// ```
///
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    #[serde(default)]
    pub unknown_fields: UnknownFieldPolicy,
}

impl CodecConfig {
    /// Configuration that rejects any field the schema does not model.
    pub fn strict() -> Self {
        CodecConfig {
            unknown_fields: UnknownFieldPolicy::Deny,
        }
    }

    /// Replace the unknown field policy.
    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl TryFrom<&Path> for CodecConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> ConfigResult<Self> {
        let toml_str = read_to_string(path)?;
        let config: CodecConfig = toml::from_str(&toml_str)?;
        log::debug!(
            "Loaded codec config from {}: unknown_fields={:?}",
            path.display(),
            config.unknown_fields
        );
        Ok(config)
    }
}
