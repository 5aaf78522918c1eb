//! The three chained decorators: documentation, repeat, and formatting.

mod doc;
mod format;
mod repeat;

pub use doc::{DocDecorator, Documented};
pub use format::{FormatDecorator, Formatted};
pub use repeat::{RepeatDecorator, Repeated};
