//! Application configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `MUSICCONNECT_API_URL` | `http://localhost:3000/api` |
//! | `MUSICCONNECT_STRIPE_PUBLIC_KEY` | none |
//! | `MUSICCONNECT_APP_VERSION` | `0.0.0` |
//! | `MUSICCONNECT_ENV` | `development` |
//!
//! Missing variables are logged and replaced by their default (or an empty
//! string). Call [`AppConfig::validate`] at startup: in production the API
//! URL and the Stripe key are required.

use serde::Serialize;

use crate::error::ConfigError;

pub const API_URL_VAR: &str = "MUSICCONNECT_API_URL";
pub const STRIPE_PUBLIC_KEY_VAR: &str = "MUSICCONNECT_STRIPE_PUBLIC_KEY";
pub const APP_VERSION_VAR: &str = "MUSICCONNECT_APP_VERSION";
pub const ENV_VAR: &str = "MUSICCONNECT_ENV";

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_APP_VERSION: &str = "0.0.0";

/// Fixed product name.
pub const APP_NAME: &str = "MusicConnect";

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_VAR,
                value: value.to_string(),
            }),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    /// Base URL of the backend API.
    pub api_url: String,
    /// Publishable Stripe key for the payment form.
    pub stripe_public_key: String,
    pub environment: Environment,
    pub app_name: &'static str,
    pub app_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            stripe_public_key: String::new(),
            environment: Environment::Development,
            app_name: APP_NAME,
            app_version: DEFAULT_APP_VERSION.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve each variable.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup(ENV_VAR).filter(|v| !v.is_empty()) {
            Some(value) => Environment::parse(&value)?,
            None => Environment::default(),
        };

        let config = Self {
            api_url: read_var(&lookup, API_URL_VAR, Some(DEFAULT_API_URL)),
            stripe_public_key: read_var(&lookup, STRIPE_PUBLIC_KEY_VAR, None),
            environment,
            app_name: APP_NAME,
            app_version: read_var(&lookup, APP_VERSION_VAR, Some(DEFAULT_APP_VERSION)),
        };

        tracing::debug!(
            environment = ?config.environment,
            api_url = %config.api_url,
            app_version = %config.app_version,
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Check that production has every variable it needs.
    ///
    /// Reports all missing variables at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_production() {
            return Ok(());
        }

        let mut missing = Vec::new();
        if self.api_url.is_empty() {
            missing.push(API_URL_VAR);
        }
        if self.stripe_public_key.is_empty() {
            missing.push(STRIPE_PUBLIC_KEY_VAR);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            tracing::error!(?missing, "production configuration incomplete");
            Err(ConfigError::MissingVariables(missing))
        }
    }
}

fn read_var<F>(lookup: &F, key: &'static str, default: Option<&str>) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|v| !v.is_empty()) {
        Some(value) => value,
        None => {
            if default.is_none() {
                tracing::warn!(key, "missing environment variable");
            }
            default.unwrap_or_default().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.is_development());
        assert_eq!(config.app_name, "MusicConnect");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (API_URL_VAR, "https://api.musicconnect.com.br"),
            (STRIPE_PUBLIC_KEY_VAR, "pk_live_123"),
            (APP_VERSION_VAR, "1.4.0"),
            (ENV_VAR, "Production"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.api_url, "https://api.musicconnect.com.br");
        assert_eq!(config.app_version, "1.4.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_value_uses_default() {
        let config = AppConfig::from_lookup(lookup(&[(API_URL_VAR, "")])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_production_requires_stripe_key() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_VAR, "production")])).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingVariables(vec![STRIPE_PUBLIC_KEY_VAR]))
        );
    }

    #[test]
    fn test_production_reports_all_missing() {
        let config = AppConfig {
            api_url: String::new(),
            environment: Environment::Production,
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required environment variables: MUSICCONNECT_API_URL, MUSICCONNECT_STRIPE_PUBLIC_KEY"
        );
    }

    #[test]
    fn test_unknown_environment() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_VAR, "staging")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ENV_VAR,
                value: "staging".into()
            }
        );
    }
}
