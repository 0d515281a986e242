//! Environment variant names.

use std::fmt;
use std::str::FromStr;

use super::EnvironmentError;

/// One of the build targets a configuration record can be materialized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvironmentName {
    #[default]
    Development,
    Staging,
    Production,
}

impl EnvironmentName {
    /// Every variant, in promotion order.
    pub const ALL: [EnvironmentName; 3] = [
        EnvironmentName::Development,
        EnvironmentName::Staging,
        EnvironmentName::Production,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentName::Development => "development",
            EnvironmentName::Staging => "staging",
            EnvironmentName::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, EnvironmentName::Production)
    }
}

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvironmentName {
    type Err = EnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(EnvironmentName::Development),
            "stage" | "staging" => Ok(EnvironmentName::Staging),
            "prod" | "production" => Ok(EnvironmentName::Production),
            other => Err(EnvironmentError::UnknownEnvironment(other.to_string())),
        }
    }
}
