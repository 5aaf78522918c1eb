//! A function call log implemented with a decorator.

use std::io::Write;

use anyhow::Result;
use decorators_call_log::{CallLogger, Invoke, LogConfig};
use decorators_core::{qualified_name, target, Repr};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("division by zero")]
pub struct ZeroDivisionError;

pub fn target_fn() -> i32 {
    42
}

pub fn divide(a: i64, b: i64) -> std::result::Result<f64, ZeroDivisionError> {
    if b == 0 {
        return Err(ZeroDivisionError);
    }
    Ok(a as f64 / b as f64)
}

/// Log three calls: one plain value, one successful division, one failing.
///
/// The failing division is reported on `out` and the demo carries on;
/// only log I/O errors stop it.
pub fn run(config: &LogConfig, out: &mut impl Write) -> Result<()> {
    let logger = CallLogger::new(config.clone());
    let target_fn = logger.wrap(qualified_name!(target_fn), target(target_fn))?;
    let divide = logger.wrap(qualified_name!(divide), target(divide))?;

    writeln!(out, "{}", target_fn.invoke(())?)?;

    for args in [(1, 1), (1, 0)] {
        match divide.invoke(args)? {
            Ok(quotient) => writeln!(out, "{}", quotient.repr())?,
            Err(error) => {
                tracing::warn!(args = %args.repr(), %error, "Division failed");
                writeln!(out, "{} raised ZeroDivisionError: {error}", divide.name())?;
            }
        }
    }

    target_fn.close()?;
    divide.close()?;

    tracing::debug!(path = %config.path().display(), "Call logging demo finished");
    Ok(())
}
