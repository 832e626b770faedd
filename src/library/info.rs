use std::fmt;

use crate::library::{config::LibConfig, utils::format_version};

/// Read-only projection of the current config, computed on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LibInfo {
    pub name: String,
    pub version: String,
    pub formatted_version: String,
}

impl LibInfo {
    pub fn from_config(config: &LibConfig) -> Self {
        LibInfo {
            name: config.name.clone(),
            version: config.version.clone(),
            formatted_version: format_version(&config.version),
        }
    }
}

impl fmt::Display for LibInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.formatted_version)
    }
}
