//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::TomlConfig;

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [sdk]
            base_uri = "https://platform.adobe.io"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(
            config.sdk.base_uri.as_deref(),
            Some("https://platform.adobe.io")
        );
        assert!(config.sdk.user_agent.is_none());
        assert!(config.sdk.headers.is_empty());
        assert!(config.auth.bearer_token.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [sdk]
            base_uri = "https://platform.adobe.io"
            user_agent = "reporting/1.0"

            [sdk.headers]
            x-api-key = "client-id"
            x-gw-ims-org-id = "ABC@AdobeOrg"
            x-sandbox-name = "prod"

            [auth]
            bearer_token = "eyJhbGciOi"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.sdk.user_agent.as_deref(), Some("reporting/1.0"));
        assert_eq!(config.sdk.headers.len(), 3);
        assert_eq!(
            config.sdk.headers.get("x-sandbox-name").map(String::as_str),
            Some("prod")
        );
        assert_eq!(config.auth.bearer_token.as_deref(), Some("eyJhbGciOi"));
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.sdk.base_uri.is_none());
    }

    #[test]
    fn debug_redacts_token() {
        let config = TomlConfig::parse(
            r#"
            [auth]
            bearer_token = "do-not-print"
        "#,
        )
        .unwrap();

        let debug = format!("{config:?}");

        assert!(!debug.contains("do-not-print"));
        assert!(debug.contains("<redacted>"));
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_key_is_rejected() {
        let result = TomlConfig::parse(
            r#"
            [sdk]
            base_url = "https://platform.adobe.io"
        "#,
        );

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[retry]\nmax_attempts = 3\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[sdk]\nbase_uri = 42\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let path = std::path::Path::new("/nonexistent/adobe-client.toml");

        let err = TomlConfig::load(path).unwrap_err();

        assert!(matches!(err, ConfigError::FileRead { .. }));
        assert!(err.to_string().contains("adobe-client.toml"));
    }
}
