//! Call logging errors including I/O operations.

use decorators_core::DecoratorsCoreError;
use thiserror::Error;

/// Call logging errors including I/O operations.
///
/// Errors raised by a wrapped target never appear here; they are handed
/// back to the caller untouched.
#[derive(Error, Debug)]
pub enum CallLogError {
    #[error("Core error: {0}")]
    Core(#[from] DecoratorsCoreError),

    #[error("Failed to open log file {path}: {source}")]
    LogOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write log file {path}: {source}")]
    LogWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CallLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_open_display() {
        let error = CallLogError::LogOpen {
            path: "/nope/functions.log".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to open log file /nope/functions.log: missing"
        );
    }

    #[test]
    fn test_core_error_converts() {
        let error: CallLogError = DecoratorsCoreError::EmptyLogPath.into();
        assert!(matches!(error, CallLogError::Core(_)));
    }
}
