use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LibError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
