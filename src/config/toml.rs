//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde. Values are
//! kept as raw strings here; [`SdkSettings`](super::SdkSettings) validates
//! them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from a TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Connection settings
    #[serde(default)]
    pub sdk: SdkSection,

    /// Credentials
    #[serde(default)]
    pub auth: AuthSection,
}

/// `[sdk]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SdkSection {
    /// Base URI of the API host (required)
    pub base_uri: Option<String>,

    /// User-Agent override
    pub user_agent: Option<String>,

    /// Default headers sent with every request, applied in key order
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// `[auth]` section.
#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    /// Access token sent as `Authorization: Bearer <token>`
    pub bearer_token: Option<String>,
}

impl std::fmt::Debug for AuthSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSection")
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or contains unknown keys.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}
