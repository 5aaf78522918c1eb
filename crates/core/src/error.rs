//! Core decorator error types (pure - no I/O variants).

use thiserror::Error;

/// Log file used when no path is configured.
pub const DEFAULT_LOG_PATH: &str = "functions.log";

/// Core decorator errors (pure - no I/O variants).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecoratorsCoreError {
    #[error("Log file path cannot be empty")]
    EmptyLogPath,
}

pub type Result<T> = std::result::Result<T, DecoratorsCoreError>;
