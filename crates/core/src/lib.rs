//! Pure decorator logic - no I/O, no side effects.
//!
//! This crate provides:
//! - The [`Invoke`] seam shared by plain functions and their wrappers
//! - [`Decorator`] composition, applied innermost first
//! - The documentation, repeat, and formatting decorators
//! - Invocation records and their rendering for the call log
//! - Configuration types with validation
//!
//! # Example
//!
//! ```
//! use decorators_core::{
//!     target, Decorator, DecoratorExt, DocConfig, DocDecorator, FormatDecorator, Invoke,
//!     RepeatConfig, RepeatDecorator,
//! };
//!
//! fn my_f(n: i64) -> String {
//!     format!("my_f = {n}")
//! }
//!
//! let my_f = FormatDecorator
//!     .then(RepeatDecorator::new(RepeatConfig::new(2)))
//!     .then(DocDecorator::new(DocConfig::new("My function documentation")))
//!     .decorate(target(my_f));
//!
//! assert_eq!(
//!     my_f.invoke((42,)),
//!     r#"outer_dec ['inner_dec: "my_f = 42"', 'inner_dec: "my_f = 42"']"#
//! );
//! assert_eq!(
//!     Invoke::<(i64,)>::description(&my_f),
//!     Some("My function documentation")
//! );
//! ```

mod call;
mod chain;
mod config;
mod decorator;
mod error;
mod invoke;
mod repr;

pub use call::{
    format_elapsed, format_timestamp, keywords_repr, CallArgs, CallOutcome, InvocationRecord,
    Outcome, QualifiedName, RenderedArgs,
};
pub use chain::{
    DocDecorator, Documented, FormatDecorator, Formatted, RepeatDecorator, Repeated,
};
pub use config::{DocConfig, LogConfig, RepeatConfig};
pub use decorator::{Composed, Decorator, DecoratorExt};
pub use error::{DecoratorsCoreError, Result, DEFAULT_LOG_PATH};
pub use invoke::{target, Invoke, Target};
pub use repr::Repr;
