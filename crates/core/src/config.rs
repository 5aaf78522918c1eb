//! Configuration captured by the decorators at construction time.

use std::path::{Path, PathBuf};

use crate::error::{DecoratorsCoreError, Result, DEFAULT_LOG_PATH};

/// Configuration for the documentation decorator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocConfig {
    /// Description exposed by the wrapped function.
    pub doc: String,
}

impl DocConfig {
    pub fn new(doc: impl Into<String>) -> Self {
        Self { doc: doc.into() }
    }
}

impl Default for DocConfig {
    fn default() -> Self {
        Self::new("no document")
    }
}

/// Configuration for the repeat decorator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatConfig {
    /// How many times the wrapped function runs per call.
    pub count: usize,
}

impl RepeatConfig {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

/// Configuration for the call logger (validated).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// File every call block is appended to.
    pub path: PathBuf,
}

impl LogConfig {
    /// Create and validate a log config.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(DecoratorsCoreError::EmptyLogPath);
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}
