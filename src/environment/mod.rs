//! Deployment environment configuration for the banking portal.
//!
//! Uses serde_yaml to load per-environment YAML files with support for
//! environment variable overrides for the API endpoint and feature flags.

mod builtin;
mod error;
mod features;
mod name;

pub use error::EnvironmentError;
pub use features::FeatureFlags;
pub use name::EnvironmentName;

use serde::{Deserialize, Serialize};
use semver::Version;
use std::{env, fs};
use url::Url;

/// Settings for one deployment environment.
///
/// Every field is required in every variant so consumers can treat the
/// record as total. The record is never mutated after loading; share it
/// freely across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// True when this record targets a production deployment.
    pub production: bool,
    /// Base endpoint consumers prefix onto relative API paths.
    pub api_url: String,
    /// Human-readable application name for display.
    pub app_name: String,
    /// Build/release version identifier (semver).
    pub version: String,
    /// Toggle for verbose diagnostic output.
    pub enable_logging: bool,
    /// Toggle for substituting simulated data instead of live calls.
    pub enable_mock_data: bool,
    /// Named feature flags.
    pub features: FeatureFlags,
}

impl EnvironmentConfig {
    /// Load a record from a YAML file at the given path.
    ///
    /// First loads environment variables from `.env` file (if exists),
    /// then loads the YAML record and applies overrides:
    /// - `PORTAL_API_URL`
    /// - `FEATURE_REPORTS`, `FEATURE_PDF_DOWNLOAD`, `FEATURE_ADVANCED_SEARCH`
    pub fn load(path: &str) -> Result<Self, EnvironmentError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let mut config: EnvironmentConfig = serde_yaml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Built-in record for a build target.
    pub fn select(name: EnvironmentName) -> Self {
        match name {
            EnvironmentName::Development => Self::development(),
            EnvironmentName::Staging => Self::staging(),
            EnvironmentName::Production => Self::production(),
        }
    }

    /// Built-in record for the target named by the `APP_ENV` variable.
    ///
    /// Falls back to development when `APP_ENV` is unset.
    pub fn resolve() -> Result<Self, EnvironmentError> {
        dotenvy::dotenv().ok();

        let name = match env::var("APP_ENV") {
            Ok(raw) => raw.parse()?,
            Err(_) => EnvironmentName::Development,
        };
        Ok(Self::select(name))
    }

    /// Render the camelCase JSON snapshot consumers embed at build time.
    pub fn to_json(&self) -> Result<String, EnvironmentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply overrides from environment variables.
    fn apply_env_overrides(&mut self) {
        if let Ok(api_url) = env::var("PORTAL_API_URL") {
            if !api_url.is_empty() {
                self.api_url = api_url;
            }
        }

        self.features.apply_env_overrides();
    }

    /// Validate the record.
    fn validate(&self) -> Result<(), EnvironmentError> {
        if self.app_name.is_empty() {
            return Err(EnvironmentError::Validation("appName is required".into()));
        }

        let api_url = Url::parse(&self.api_url).map_err(|e| {
            EnvironmentError::Validation(format!("apiUrl is not an absolute URL: {}", e))
        })?;

        match api_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(EnvironmentError::Validation(format!(
                    "apiUrl must use http or https, got {}",
                    other
                )));
            }
        }

        if Version::parse(&self.version).is_err() {
            return Err(EnvironmentError::Validation(format!(
                "version is not a semantic version: {}",
                self.version
            )));
        }

        if self.production && self.enable_mock_data {
            return Err(EnvironmentError::Validation(
                "enableMockData must be false in production".into(),
            ));
        }

        Ok(())
    }
}
