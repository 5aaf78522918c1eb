//! Three chained decorators around one base function.
//!
//! - format the result into a string (no configuration)
//! - run it `n` times (repeat count)
//! - attach a description (documentation with a default)

use std::io::Write;

use anyhow::Result;
use decorators_core::{
    target, Decorator, DecoratorExt, DocConfig, DocDecorator, FormatDecorator, Invoke,
    RepeatConfig, RepeatDecorator,
};

pub fn my_f(n: i64) -> String {
    format!("my_f = {n}")
}

/// Build `my_f` wrapped innermost first: format, repeat, document.
pub fn decorated_my_f(
    doc: &DocConfig,
    repeat: RepeatConfig,
) -> impl Invoke<(i64,), Output = String> {
    FormatDecorator
        .then(RepeatDecorator::new(repeat))
        .then(DocDecorator::new(doc.clone()))
        .decorate(target(my_f))
}

pub fn run(doc: &DocConfig, repeat: RepeatConfig, out: &mut impl Write) -> Result<()> {
    let my_f = decorated_my_f(doc, repeat);

    writeln!(
        out,
        "Docstring for my_f: {}",
        my_f.description().unwrap_or_default()
    )?;
    writeln!(out, "{}", my_f.invoke((42,)))?;

    tracing::debug!(repeat = repeat.count, "Chained decorator demo finished");
    Ok(())
}
