//! Validated settings built from a configuration file.

use std::fmt;
use std::path::Path;

use http::header::{HeaderName, HeaderValue};
use url::Url;

use crate::auth::BearerToken;
use crate::sdk::Sdk;
use crate::transport::HttpClient;

use super::error::{ConfigError, field};
use super::sdk::SdkConfig;
use super::toml::TomlConfig;

/// Fully validated settings ready to build an [`Sdk`].
///
/// All validation happens in [`SdkSettings::from_toml`]; holding a value of
/// this type means every header and the base URI are usable.
pub struct SdkSettings {
    /// Connection configuration
    pub config: SdkConfig,

    /// Bearer credential, when the file provides one
    pub bearer: Option<BearerToken>,
}

impl SdkSettings {
    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(TomlConfig::load(path)?)
    }

    /// Parses and validates settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be parsed or validated.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::from_toml(TomlConfig::parse(content)?)
    }

    /// Validates a parsed configuration file.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure: a missing or malformed base
    /// URI, an unusable header name or value, or an unusable token.
    pub fn from_toml(toml: TomlConfig) -> Result<Self, ConfigError> {
        let base_uri = toml.sdk.base_uri.ok_or_else(|| {
            ConfigError::missing(
                field::BASE_URI,
                "Set base_uri in the [sdk] section, e.g. \"https://platform.adobe.io\".",
            )
        })?;
        validate_base_uri(&base_uri)?;

        let mut config = SdkConfig::new(base_uri);

        if let Some(user_agent) = toml.sdk.user_agent {
            config = config.with_user_agent(parse_header_value("User-Agent", &user_agent)?);
        }

        for (name, value) in &toml.sdk.headers {
            config = config.with_default_header(
                parse_header_name(name)?,
                parse_header_value(name, value)?,
            );
        }

        let bearer = toml
            .auth
            .bearer_token
            .as_deref()
            .map(|token| {
                BearerToken::new(token).map_err(|e| ConfigError::InvalidToken {
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        Ok(Self { config, bearer })
    }

    /// Builds a façade over `transport`, authenticated when a token was configured.
    #[must_use]
    pub fn into_sdk<H: HttpClient>(self, transport: H) -> Sdk<H> {
        match self.bearer {
            Some(token) => Sdk::authenticated(transport, self.config, token),
            None => Sdk::new(transport, self.config),
        }
    }
}

impl fmt::Debug for SdkSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkSettings")
            .field("config", &self.config)
            .field("bearer", &self.bearer.is_some())
            .finish()
    }
}

fn validate_base_uri(base_uri: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidUrl {
        url: base_uri.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(base_uri).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("base URI cannot carry a query or fragment"));
    }

    Ok(())
}

fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    name.parse::<HeaderName>()
        .map_err(|e| ConfigError::InvalidHeaderName {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeaderValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
