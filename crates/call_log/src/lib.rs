//! Call Logging Decorator - Imperative Shell.
//!
//! This crate performs the I/O around the pure records built by
//! `decorators_core`: it opens the log file when a target is wrapped,
//! times each call, and appends one block per call.
//!
//! # Architecture
//!
//! - **Functional Core** (`decorators_core`): Invoke seam, records, rendering
//! - **Imperative Shell** (this crate): Log file handle, clock reads, tracing
//!
//! # Example
//!
//! ```no_run
//! use decorators_call_log::{CallLogger, Invoke, LogConfig};
//! use decorators_core::{qualified_name, target};
//!
//! fn target_fn() -> i32 {
//!     42
//! }
//!
//! // Open the log once per wrapped function (I/O)
//! let logger = CallLogger::new(LogConfig::default());
//! let target_fn = logger.wrap(qualified_name!(target_fn), target(target_fn)).unwrap();
//!
//! // Every call appends a block before the result is returned
//! assert_eq!(target_fn.invoke(()).unwrap(), 42);
//! ```

mod error;
mod log_file;
mod logger;

// Re-export core types for convenience
pub use decorators_core::{Invoke, LogConfig, QualifiedName, DEFAULT_LOG_PATH};

// Export shell types
pub use error::{CallLogError, Result};
pub use log_file::LogFile;
pub use logger::{CallLogger, Logged};
