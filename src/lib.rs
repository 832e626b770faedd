//! # lobe-lib-template
//!
//! A starting point for small Rust libraries: a configuration holder with
//! accessors, a handful of config helpers, a delayed async pass-through and a
//! data validator.
//!
//! ## Features
//!
//! - **Config Model**: named and versioned [`LibConfig`] with a debug flag
//! - **Partial Updates**: merge a [`ConfigUpdate`] onto the current config
//! - **Async Pass-Through**: `process_data` returns its input after a timeout
//! - **Validation**: presence and emptiness checks through [`DataValidator`]
//! - **Serialization**: optional serde support for every value type
//!
//! ## Quick Start
//!
//! ```rust
//! use lobe_lib_template::{ConfigUpdate, LibConfig, LibOptions, LobeLib};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LibConfig::new("my-awesome-lib", "2.0.0").debug(true);
//!     config.validate()?;
//!
//!     let mut lib = LobeLib::with_options(LibOptions::new().config(config).timeout_ms(50));
//!     println!("{}", lib.get_info());
//!
//!     lib.update_config(ConfigUpdate::new().version("2.1.0"));
//!     assert_eq!(lib.get_info().formatted_version, "v2.1.0");
//!
//!     let validation = lib.validate_data("   ");
//!     assert!(!validation.is_valid);
//!     Ok(())
//! }
//! ```
//!
//! With the `tokio` feature, `LobeLib::process_data` hands its input back once
//! the timeout elapses:
//!
//! ```rust,ignore
//! let result = lib.process_data("Hello!").await;
//! assert_eq!(result, "Hello!");
//! ```
//!
//! ## Timeouts
//!
//! [`LobeLib::new`] stores a 5000 ms timeout, and so does
//! [`LobeLib::with_options`] when the options carry none. A zero timeout makes
//! `process_data` wait 1000 ms instead.
//!
//! ## Optional Features
//!
//! - `tokio`: Enable `process_data` (on by default)
//! - `tracing`: Enable structured logging and the debug emission (on by default)
//! - `serde`: Enable serialization support for all types

pub mod helper;
pub mod library;

pub use library::{
    config::{ConfigUpdate, LibConfig, LibOptions},
    error::LibError,
    facade::{Lib, LobeLib},
    info::LibInfo,
    utils::{create_default_config, format_version, validate_config},
    validator::{DataValidator, DataValue, ValidationResult},
};
