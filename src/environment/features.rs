//! Feature flag configuration.

use serde::{Deserialize, Serialize};
use std::env;

/// Named feature toggles for discrete portal capabilities.
///
/// Flags are independent: toggling one never changes another field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    /// Account and transaction report generation.
    pub enable_reports: bool,
    /// PDF export of statements and reports.
    pub enable_pdf_download: bool,
    /// Advanced transaction search filters.
    pub enable_advanced_search: bool,
}

impl FeatureFlags {
    /// Apply `FEATURE_*` environment variable overrides.
    ///
    /// An unset or unrecognized variable keeps the file value.
    pub(super) fn apply_env_overrides(&mut self) {
        self.enable_reports = env_flag("FEATURE_REPORTS", self.enable_reports);
        self.enable_pdf_download = env_flag("FEATURE_PDF_DOWNLOAD", self.enable_pdf_download);
        self.enable_advanced_search =
            env_flag("FEATURE_ADVANCED_SEARCH", self.enable_advanced_search);
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(raw) => parse_flag(&raw).unwrap_or(default),
        Err(_) => default,
    }
}

/// Recognize the usual truthy/falsy spellings; `None` for anything else.
pub(super) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
