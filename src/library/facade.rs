use std::time::Duration;

use crate::library::{
    config::{ConfigUpdate, DEFAULT_TIMEOUT_MS, FALLBACK_TIMEOUT_MS, LibConfig, LibOptions},
    info::LibInfo,
    validator::{DataValidator, DataValue, ValidationResult},
};

/// Stateful wrapper owning one [`LibConfig`] and the construction options.
///
/// # Examples
///
/// ```rust
/// use lobe_lib_template::library::{config::ConfigUpdate, facade::LobeLib};
///
/// let mut lib = LobeLib::new();
/// assert_eq!(lib.get_info().formatted_version, "v1.0.0");
///
/// lib.update_config(ConfigUpdate::new().debug(true).version("1.1.0"));
/// let config = lib.get_config();
/// assert_eq!(config.name, "lobe-lib-template");
/// assert_eq!(config.version, "1.1.0");
/// assert!(config.debug);
/// ```
#[derive(Debug, Clone)]
pub struct LobeLib {
    config: LibConfig,
    options: LibOptions,
}

/// Alias kept for callers that import the library under its short name.
pub type Lib = LobeLib;

impl Default for LobeLib {
    fn default() -> Self {
        Self::new()
    }
}

impl LobeLib {
    /// Creates a library with the default config and a 5000 ms timeout.
    pub fn new() -> Self {
        Self::with_options(LibOptions::new())
    }

    /// Creates a library from explicit options.
    ///
    /// Supplied fields win over the 5000 ms base; options without a timeout
    /// keep the base. A zero timeout is stored as given and `process_data`
    /// falls back to 1000 ms for it.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn with_options(mut options: LibOptions) -> Self {
        let config = options.config.take().unwrap_or_default();
        options.timeout_ms = options.timeout_ms.or(Some(DEFAULT_TIMEOUT_MS));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            name = %config.name,
            version = %config.version,
            debug = config.debug,
            timeout_ms = ?options.timeout_ms,
            "Library created"
        );

        LobeLib { config, options }
    }

    /// Returns an independent copy of the current config.
    pub fn get_config(&self) -> LibConfig {
        self.config.clone()
    }

    /// Overlays `update` onto the current config without validating the result.
    pub fn update_config(&mut self, update: ConfigUpdate) {
        self.config = update.apply_to(&self.config);

        #[cfg(feature = "tracing")]
        if !self.config.is_valid() {
            tracing::trace!(config = ?self.config, "Config updated to an invalid state");
        }
    }

    pub fn get_info(&self) -> LibInfo {
        LibInfo::from_config(&self.config)
    }

    /// Timeout stored at construction, in milliseconds.
    pub fn timeout_ms(&self) -> Option<u64> {
        self.options.timeout_ms
    }

    /// Delay applied by `process_data`. A zero timeout falls back to 1000 ms.
    pub fn effective_timeout(&self) -> Duration {
        match self.options.timeout_ms {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => Duration::from_millis(FALLBACK_TIMEOUT_MS),
        }
    }

    pub fn validate_data<T: DataValue + ?Sized>(&self, data: &T) -> ValidationResult {
        DataValidator::validate(data)
    }

    #[cfg_attr(not(feature = "tokio"), allow(dead_code))]
    pub(crate) fn config_ref(&self) -> &LibConfig {
        &self.config
    }
}
