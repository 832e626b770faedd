use crate::library::{error::LibError, utils};

/// Name used by the default configuration.
pub const DEFAULT_LIB_NAME: &str = "lobe-lib-template";

/// Version used by the default configuration.
pub const DEFAULT_LIB_VERSION: &str = "1.0.0";

/// Timeout stored by a [`crate::library::facade::LobeLib`] built without options.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Delay used by `process_data` when the stored timeout is unset or zero.
pub const FALLBACK_TIMEOUT_MS: u64 = 1000;

/// Identity and behavior mode of the library.
///
/// A config is valid when both `name` and `version` are non-empty.
/// `debug` has no bearing on validity.
///
/// # Examples
///
/// ```rust
/// use lobe_lib_template::library::config::LibConfig;
///
/// let config = LibConfig::new("my-awesome-lib", "2.0.0").debug(true);
/// assert!(config.is_valid());
/// assert!(config.debug);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LibConfig {
    /// Library identifier
    pub name: String,

    /// Version string, no format enforced
    pub version: String,

    /// Emit diagnostics from `process_data`
    #[cfg_attr(feature = "serde", serde(default))]
    pub debug: bool,
}

impl Default for LibConfig {
    fn default() -> Self {
        utils::create_default_config()
    }
}

impl LibConfig {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        LibConfig {
            name: name.into(),
            version: version.into(),
            debug: false,
        }
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Boolean validity check, same as [`utils::validate_config`].
    pub fn is_valid(&self) -> bool {
        utils::validate_config(self)
    }

    /// Validates the configuration and reports the first missing field.
    ///
    /// # Errors
    ///
    /// Returns [`LibError::InvalidConfiguration`] if:
    /// - `name` is empty
    /// - `version` is empty
    ///
    /// # Examples
    /// ```rust
    /// use lobe_lib_template::library::{config::LibConfig, error::LibError};
    ///
    /// let config = LibConfig::new("test", "");
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(LibError::InvalidConfiguration("missing version".to_string()))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), LibError> {
        if self.name.is_empty() {
            return Err(LibError::InvalidConfiguration("missing name".to_string()));
        }
        if self.version.is_empty() {
            return Err(LibError::InvalidConfiguration(
                "missing version".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial configuration applied by `update_config`.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ConfigUpdate {
    pub name: Option<String>,
    pub version: Option<String>,
    pub debug: Option<bool>,
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.version.is_none() && self.debug.is_none()
    }

    /// Overlays the present fields onto `base`. The result is not validated.
    pub fn apply_to(&self, base: &LibConfig) -> LibConfig {
        LibConfig {
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            version: self.version.clone().unwrap_or_else(|| base.version.clone()),
            debug: self.debug.unwrap_or(base.debug),
        }
    }
}

/// Construction-time options for [`crate::library::facade::LobeLib`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LibOptions {
    /// Initial config, the default config when absent
    pub config: Option<LibConfig>,

    /// Delay of `process_data` in milliseconds
    #[cfg_attr(feature = "serde", serde(rename = "timeout"))]
    pub timeout_ms: Option<u64>,
}

impl LibOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: LibConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn timeout_ms(mut self, timeout: u64) -> Self {
        self.timeout_ms = Some(timeout);
        self
    }
}
