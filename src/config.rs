//! Configuration management for the Freshservice MCP server.
//!
//! This module handles loading configuration from environment variables,
//! with validation to ensure all required values are present. The resulting
//! `Config` is built once at startup and passed by reference to whatever
//! needs it.

use std::env;
use std::fmt;

use url::Url;

use crate::error::FreshError;

/// Default whole-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DOMAIN_VAR: &str = "FRESHSERVICE_DOMAIN";
const API_KEY_VAR: &str = "FRESHSERVICE_APIKEY";
const TIMEOUT_VAR: &str = "FRESHSERVICE_TIMEOUT_SECS";

/// Configuration for connecting to Freshservice.
///
/// The API key is stored but never logged or exposed in error messages;
/// the `Debug` implementation redacts it.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the Freshservice account (e.g., `https://acme.freshservice.com`).
    pub base_url: String,

    /// API key used as the Basic auth user name.
    /// This value must never be logged or included in error messages.
    pub api_key: String,

    /// Whole-request timeout applied to every HTTP call.
    pub timeout_secs: u64,
}

impl Config {
    /// Builds a configuration from a domain and API key, validating both.
    ///
    /// `domain` is either a bare host (`acme.freshservice.com`), which gets an
    /// `https://` prefix, or a full `http(s)://` URL used as-is.
    ///
    /// # Errors
    ///
    /// Returns `FreshError::Config` if the domain is not a valid URL or the
    /// key is empty or a placeholder.
    pub fn new(domain: &str, api_key: &str) -> Result<Self, FreshError> {
        let base_url = Self::normalize_domain(domain)?;
        Self::validate_api_key(api_key)?;

        Ok(Config {
            base_url,
            api_key: api_key.trim().to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Overrides the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FRESHSERVICE_DOMAIN` (required): account host or URL
    /// - `FRESHSERVICE_APIKEY` (required): API key
    /// - `FRESHSERVICE_TIMEOUT_SECS` (optional): request timeout, default 30
    ///
    /// # Errors
    ///
    /// Returns `FreshError::Config` if any required variable is missing
    /// or if values fail validation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, FreshError> {
        let domain = Self::get_required_env(DOMAIN_VAR)?;
        let api_key = Self::get_required_env(API_KEY_VAR)?;
        let timeout_secs = match env::var(TIMEOUT_VAR) {
            Ok(raw) if !raw.trim().is_empty() => Self::parse_timeout(&raw)?,
            _ => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::new(&domain, &api_key)?.with_timeout_secs(timeout_secs))
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, FreshError> {
        env::var(name)
            .map_err(|_| FreshError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(FreshError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    fn parse_timeout(raw: &str) -> Result<u64, FreshError> {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(FreshError::invalid_config(format!(
                "{} must be a positive integer number of seconds",
                TIMEOUT_VAR
            ))),
        }
    }

    /// Turns the configured domain into a base URL without a trailing slash.
    fn normalize_domain(domain: &str) -> Result<String, FreshError> {
        let domain = domain.trim().trim_end_matches('/');
        if domain.is_empty() {
            return Err(FreshError::missing_env(DOMAIN_VAR));
        }

        let candidate = if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        };

        let parsed = Url::parse(&candidate).map_err(|e| {
            FreshError::invalid_config(format!("{} is not a valid host or URL: {}", DOMAIN_VAR, e))
        })?;
        if parsed.host_str().is_none() {
            return Err(FreshError::invalid_config(format!(
                "{} must name a host",
                DOMAIN_VAR
            )));
        }

        Ok(candidate)
    }

    /// Validates the API key is not empty or a placeholder value.
    fn validate_api_key(key: &str) -> Result<(), FreshError> {
        if key.trim().is_empty() {
            return Err(FreshError::missing_env(API_KEY_VAR));
        }

        let key_lower = key.trim().to_lowercase();
        let placeholder_prefixes = ["your_api_key", "your_key", "placeholder", "changeme"];

        let is_placeholder = placeholder_prefixes
            .iter()
            .any(|prefix| key_lower.starts_with(prefix))
            || key_lower.chars().all(|c| c == 'x');

        if is_placeholder {
            return Err(FreshError::invalid_config(format!(
                "{} appears to be a placeholder value",
                API_KEY_VAR
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_https_prefix() {
        let config = Config::new("acme.freshservice.com", "abc123def456").unwrap();
        assert_eq!(config.base_url, "https://acme.freshservice.com");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_full_url_is_kept_without_trailing_slash() {
        let config = Config::new("http://127.0.0.1:8080/", "abc123def456").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_domain_rejected() {
        let result = Config::new("not a host", "abc123def456");
        assert!(matches!(result, Err(FreshError::Config(_))));
    }

    #[test]
    fn test_validate_api_key_rejects_placeholder() {
        let result = Config::validate_api_key("your_api_key_here");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_api_key_rejects_all_x_key() {
        assert!(Config::validate_api_key("XXXXXXXX").is_err());
        assert!(Config::validate_api_key("changeme").is_err());
    }

    #[test]
    fn test_validate_api_key_accepts_key_containing_xxx() {
        assert!(Config::validate_api_key("Ab9xxxQ7rT2mZk").is_ok());
        assert!(Config::validate_api_key("k3placeholder9").is_ok());
    }

    #[test]
    fn test_validate_api_key_rejects_empty() {
        assert!(Config::validate_api_key("   ").is_err());
    }

    #[test]
    fn test_validate_api_key_accepts_real_key() {
        let result = Config::validate_api_key("abc123def456");
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(Config::parse_timeout("45").unwrap(), 45);
        assert!(Config::parse_timeout("0").is_err());
        assert!(Config::parse_timeout("soon").is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::new("acme.freshservice.com", "abc123def456").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("abc123def456"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("acme.freshservice.com"));
    }
}
