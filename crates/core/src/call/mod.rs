//! Call records: what a logged invocation looked like and how it ended.

mod args;
mod outcome;
mod record;

pub use args::{keywords_repr, CallArgs, RenderedArgs};
pub use outcome::{CallOutcome, Outcome};
pub use record::{format_elapsed, format_timestamp, InvocationRecord, QualifiedName};

/// Build a [`QualifiedName`] for a function in the calling module.
///
/// ```
/// use decorators_core::qualified_name;
///
/// fn divide(a: i64, b: i64) -> i64 {
///     a / b
/// }
///
/// let name = qualified_name!(divide);
/// assert_eq!(name.name(), "divide");
/// assert!(name.to_string().ends_with("::divide"));
/// ```
#[macro_export]
macro_rules! qualified_name {
    ($function:ident) => {
        $crate::QualifiedName::new(module_path!(), stringify!($function))
    };
}
