use crate::library::config::{DEFAULT_LIB_NAME, DEFAULT_LIB_VERSION, LibConfig};

/// Builds the configuration used when none is supplied.
///
/// # Examples
/// ```rust
/// use lobe_lib_template::library::utils::create_default_config;
///
/// let config = create_default_config();
/// assert_eq!(config.name, "lobe-lib-template");
/// assert_eq!(config.version, "1.0.0");
/// assert!(!config.debug);
/// ```
pub fn create_default_config() -> LibConfig {
    LibConfig {
        name: DEFAULT_LIB_NAME.to_string(),
        version: DEFAULT_LIB_VERSION.to_string(),
        debug: false,
    }
}

/// Prefixes `version` with `v`. Any input is accepted verbatim.
///
/// # Examples
/// ```rust
/// use lobe_lib_template::library::utils::format_version;
///
/// assert_eq!(format_version("1.2.3"), "v1.2.3");
/// assert_eq!(format_version(""), "v");
/// ```
pub fn format_version(version: &str) -> String {
    format!("v{version}")
}

/// Returns `true` when both `name` and `version` are non-empty.
pub fn validate_config(config: &LibConfig) -> bool {
    !config.name.is_empty() && !config.version.is_empty()
}
