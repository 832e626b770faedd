pub mod config;
pub mod error;
pub mod facade;
pub mod info;
pub mod utils;
pub mod validator;

#[cfg(feature = "tokio")]
pub mod process;


#[cfg(all(test, feature = "tokio"))]
mod integration_tests;
