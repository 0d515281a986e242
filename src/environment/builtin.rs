//! Built-in environment variants.
//!
//! One record per build target, mirroring the files under `configs/`.
//! All variants carry the full set of fields.

use super::{EnvironmentConfig, FeatureFlags};

impl EnvironmentConfig {
    /// Local development: verbose logs, mock data, localhost API.
    pub fn development() -> Self {
        Self {
            production: false,
            api_url: "http://localhost:8080/spf-msa-apex-core-service".to_string(),
            app_name: "Banking Portal".to_string(),
            version: "1.0.0".to_string(),
            enable_logging: true,
            enable_mock_data: true,
            features: FeatureFlags {
                enable_reports: true,
                enable_pdf_download: true,
                enable_advanced_search: true,
            },
        }
    }

    /// Staging: live data against the staging gateway, logs still on.
    pub fn staging() -> Self {
        Self {
            production: false,
            api_url: "https://staging-api.pichincha.com/spf-msa-apex-core-service".to_string(),
            app_name: "Banking Portal".to_string(),
            version: "1.0.0".to_string(),
            enable_logging: true,
            enable_mock_data: false,
            features: FeatureFlags {
                enable_reports: true,
                enable_pdf_download: true,
                enable_advanced_search: true,
            },
        }
    }

    /// Production: the record bundled into release builds.
    pub fn production() -> Self {
        Self {
            production: true,
            api_url: "https://dev-api.pichincha.com/spf-msa-apex-core-service".to_string(),
            app_name: "Banking Portal".to_string(),
            version: "1.0.0".to_string(),
            enable_logging: false,
            enable_mock_data: false,
            features: FeatureFlags {
                enable_reports: true,
                enable_pdf_download: true,
                enable_advanced_search: true,
            },
        }
    }
}
