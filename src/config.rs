//! Configuration management for the contact form.
//!
//! This module handles loading and validating configuration from environment variables,
//! optionally read from a `.env` file. The loaded value is handed to the client and the
//! validator at construction; nothing else reads the environment.

use crate::domain::{FieldCase, PhoneRegion};
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact form.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Web app endpoint that receives submissions
    pub endpoint_url: String,

    /// Region for phone numbers typed without a `+` prefix (default: none, any region)
    pub phone_region: Option<PhoneRegion>,

    /// Payload key casing (default: capitalized)
    pub field_case: FieldCase,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACT_FORM_ENDPOINT_URL`: URL submissions are POSTed to
    ///
    /// Optional environment variables:
    /// - `CONTACT_FORM_PHONE_REGION`: ISO 3166 alpha-2 region, e.g. `US`
    /// - `CONTACT_FORM_FIELD_CASE`: `capitalized` (default) or `lowercase`
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let endpoint_url = env::var("CONTACT_FORM_ENDPOINT_URL")
            .map_err(|_| ConfigError::MissingVar("CONTACT_FORM_ENDPOINT_URL".to_string()))?;

        let endpoint_url = endpoint_url.trim().to_string();
        if !endpoint_url.starts_with("http://") && !endpoint_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_FORM_ENDPOINT_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let phone_region = Self::parse_phone_region("CONTACT_FORM_PHONE_REGION")?;
        let field_case = Self::parse_field_case("CONTACT_FORM_FIELD_CASE")?;

        Ok(Config {
            endpoint_url,
            phone_region,
            field_case,
        })
    }

    /// Parse an optional region code; empty counts as unset.
    fn parse_phone_region(var_name: &str) -> ConfigResult<Option<PhoneRegion>> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Ok(None),
            Ok(val) => val
                .trim()
                .to_ascii_uppercase()
                .parse::<PhoneRegion>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be an ISO 3166 alpha-2 region code, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }

    fn parse_field_case(var_name: &str) -> ConfigResult<FieldCase> {
        match env::var(var_name) {
            Ok(val) => val
                .parse::<FieldCase>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason,
                }),
            Err(_) => Ok(FieldCase::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.endpoint_url.is_empty());
        assert_eq!(config.phone_region, None);
        assert_eq!(config.field_case, FieldCase::Capitalized);
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_FORM_ENDPOINT_URL", "script.google.com/macros/s/abc/exec");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_FORM_ENDPOINT_URL");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set(
            "CONTACT_FORM_ENDPOINT_URL",
            "https://script.google.com/macros/s/abc/exec",
        );
        guard.set("CONTACT_FORM_PHONE_REGION", "us");
        guard.set("CONTACT_FORM_FIELD_CASE", "lowercase");

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.endpoint_url,
            "https://script.google.com/macros/s/abc/exec"
        );
        assert_eq!(config.phone_region, Some("US".parse().unwrap()));
        assert_eq!(config.field_case, FieldCase::Lowercase);
    }

    #[test]
    #[serial]
    fn test_config_invalid_region() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_FORM_ENDPOINT_URL", "https://example.com/exec");
        guard.set("CONTACT_FORM_PHONE_REGION", "Atlantis");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_FORM_PHONE_REGION");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_field_case_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_FIELD_CASE_INVALID", "SCREAMING");

        let result = Config::parse_field_case("TEST_FIELD_CASE_INVALID");
        assert!(result.is_err());

        let result = Config::parse_field_case("NONEXISTENT_FIELD_CASE");
        assert_eq!(result.unwrap(), FieldCase::Capitalized);
    }

    #[test]
    #[serial]
    fn test_parse_phone_region_blank_is_unset() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_PHONE_REGION_BLANK", "  ");

        let result = Config::parse_phone_region("TEST_PHONE_REGION_BLANK");
        assert_eq!(result.unwrap(), None);
    }
}
