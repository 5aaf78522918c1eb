//! The call logging decorator.

use std::panic::{self, AssertUnwindSafe};

use chrono::Local;
use decorators_core::{
    CallArgs, CallOutcome, Invoke, InvocationRecord, LogConfig, Outcome, QualifiedName,
    RenderedArgs,
};

use crate::error::Result;
use crate::log_file::LogFile;

/// Wraps targets so every call is recorded in the configured log file.
#[derive(Clone, Debug, Default)]
pub struct CallLogger {
    config: LogConfig,
}

impl CallLogger {
    pub fn new(config: LogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Wrap `target`, opening the log file once for its lifetime.
    ///
    /// Fails fast with [`CallLogError::LogOpen`](crate::CallLogError::LogOpen)
    /// when the file cannot be opened.
    pub fn wrap<F>(&self, name: QualifiedName, target: F) -> Result<Logged<F>> {
        let log = LogFile::open(self.config.path())?;

        tracing::debug!(function = %name, path = %log.path().display(), "Wrapped for call logging");

        Ok(Logged { name, target, log })
    }
}

/// A target whose calls are appended to a log file.
///
/// The output of [`Invoke::invoke`] is `Result<TargetOutput, CallLogError>`:
/// the outer error only reports log I/O, while the inner value is exactly
/// what the target produced, errors included. A panicking target is logged
/// as raised and its panic resumed. The target's description is not kept.
#[derive(Debug)]
pub struct Logged<F> {
    name: QualifiedName,
    target: F,
    log: LogFile,
}

impl<F> Logged<F> {
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    /// Release the log handle, reporting any final I/O error.
    pub fn close(self) -> Result<()> {
        self.log.close()
    }
}

impl<F, Args> Invoke<Args> for Logged<F>
where
    F: Invoke<Args>,
    F::Output: CallOutcome,
    Args: CallArgs,
{
    type Output = Result<F::Output>;

    fn invoke(&self, args: Args) -> Self::Output {
        let rendered = RenderedArgs::of(&args);

        let started_at = Local::now();
        let output = panic::catch_unwind(AssertUnwindSafe(|| self.target.invoke(args)));
        let finished_at = Local::now();

        let outcome = match &output {
            Ok(output) => output.outcome(),
            Err(payload) => Outcome::panicked(payload.as_ref()),
        };
        let record =
            InvocationRecord::new(self.name.clone(), rendered, started_at, finished_at, outcome);
        let appended = self.log.append(&record.render());

        match &record.outcome {
            Outcome::Raised { type_name, .. } => {
                tracing::warn!(function = %self.name, error_type = *type_name, "Call raised");
            }
            Outcome::Returned { .. } => {
                tracing::debug!(
                    function = %self.name,
                    elapsed_us = record.elapsed().num_microseconds(),
                    "Call logged"
                );
            }
        }

        // The panic keeps unwinding once its block is on disk.
        let output = output.unwrap_or_else(|payload| panic::resume_unwind(payload));
        appended?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::NaiveDateTime;
    use decorators_core::{
        format_elapsed, qualified_name, target, Decorator, DocConfig, DocDecorator,
        DecoratorsCoreError,
    };

    use super::*;
    use crate::error::CallLogError;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("division by zero")]
    struct ZeroDivisionError;

    fn target_fn() -> i32 {
        42
    }

    fn divide(a: i64, b: i64) -> std::result::Result<f64, ZeroDivisionError> {
        if b == 0 {
            return Err(ZeroDivisionError);
        }
        Ok(a as f64 / b as f64)
    }

    fn logger_in(dir: &Path) -> CallLogger {
        CallLogger::new(LogConfig::new(dir.join("functions.log")).unwrap())
    }

    fn read_log(logger: &CallLogger) -> String {
        std::fs::read_to_string(logger.config().path()).unwrap()
    }

    fn field<'a>(block: &'a str, label: &str) -> &'a str {
        block
            .lines()
            .find_map(|line| line.trim_start().strip_prefix(label))
            .unwrap()
    }

    #[test]
    fn test_returned_value_is_logged_and_passed_through() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());
        let logged = logger.wrap(qualified_name!(target_fn), target(target_fn)).unwrap();

        assert_eq!(logged.invoke(()).unwrap(), 42);

        let log = read_log(&logger);
        assert_eq!(log.matches("function call:").count(), 1);
        assert!(log.contains("function call: decorators_call_log::logger::tests::target_fn"));
        assert!(log.contains("args: ()"));
        assert!(log.contains("kwargs: {}"));
        assert!(log.contains("function returned: i32, value: 42"));
    }

    #[test]
    fn test_divide_returns_float() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());
        let logged = logger.wrap(qualified_name!(divide), target(divide)).unwrap();

        assert_eq!(logged.invoke((1, 1)).unwrap(), Ok(1.0));

        let log = read_log(&logger);
        assert!(log.contains("args: (1, 1)"));
        assert!(log.contains("function returned: f64, value: 1.0"));
        assert!(!log.contains("RAISED EXCEPTION"));
    }

    #[test]
    fn test_divide_by_zero_is_logged_then_returned_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());
        let logged = logger.wrap(qualified_name!(divide), target(divide)).unwrap();

        let result: std::result::Result<f64, ZeroDivisionError> = logged.invoke((1, 0)).unwrap();
        assert_eq!(result, Err(ZeroDivisionError));

        let log = read_log(&logger);
        assert!(log.contains("RAISED EXCEPTION"));
        assert!(log.contains(&format!(
            "of type {}",
            std::any::type_name::<ZeroDivisionError>()
        )));
        assert!(log.contains("args: ('division by zero',)"));
        assert!(!log.contains("function returned:"));
    }

    #[test]
    fn test_block_is_written_before_caller_sees_result() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());
        let logged = logger.wrap(qualified_name!(divide), target(divide)).unwrap();

        let _ = logged.invoke((1, 0)).unwrap();
        assert!(read_log(&logger).contains("RAISED EXCEPTION"));
    }

    #[test]
    fn test_repeated_calls_append_independent_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());
        let logged = logger.wrap(qualified_name!(target_fn), target(target_fn)).unwrap();

        let mut previous = String::new();
        for expected_blocks in 1..=3 {
            logged.invoke(()).unwrap();
            let log = read_log(&logger);
            assert!(log.starts_with(&previous));
            assert!(log.len() > previous.len());
            assert_eq!(log.matches("function call:").count(), expected_blocks);
            previous = log;
        }
    }

    #[test]
    fn test_elapsed_matches_logged_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());
        let logged = logger.wrap(qualified_name!(divide), target(divide)).unwrap();
        logged.invoke((4, 2)).unwrap().unwrap();

        let log = read_log(&logger);
        let started = log.lines().find(|line| !line.is_empty()).unwrap();
        let finished = field(&log, "end time: ");
        let elapsed = field(&log, "elapsed: ");

        let format = "%Y-%m-%d %H:%M:%S%.f";
        let started = NaiveDateTime::parse_from_str(started, format).unwrap();
        let finished = NaiveDateTime::parse_from_str(finished, format).unwrap();

        assert!(finished >= started);
        assert_eq!(elapsed, format_elapsed(finished - started));
    }

    #[test]
    fn test_wrappers_sharing_a_path_both_append() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());
        let answer = logger.wrap(qualified_name!(target_fn), target(target_fn)).unwrap();
        let quotient = logger.wrap(qualified_name!(divide), target(divide)).unwrap();

        answer.invoke(()).unwrap();
        quotient.invoke((9, 3)).unwrap().unwrap();

        let log = read_log(&logger);
        let first = log.find("::target_fn").unwrap();
        let second = log.find("::divide").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_wrap_fails_when_log_cannot_be_opened() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig::new(dir.path().join("missing/functions.log")).unwrap();
        let logger = CallLogger::new(config);

        let result = logger.wrap(qualified_name!(target_fn), target(target_fn));
        assert!(matches!(result, Err(CallLogError::LogOpen { .. })));
    }

    #[test]
    fn test_empty_log_path_is_rejected() {
        let result = LogConfig::new("").map_err(CallLogError::from);
        assert!(matches!(
            result,
            Err(CallLogError::Core(DecoratorsCoreError::EmptyLogPath))
        ));
    }

    #[test]
    fn test_description_is_not_kept() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());
        let documented = DocDecorator::new(DocConfig::new("answers")).decorate(target(target_fn));
        let logged = logger.wrap(qualified_name!(target_fn), documented).unwrap();

        assert_eq!(Invoke::<()>::description(&logged), None);
    }

    #[test]
    fn test_panicking_target_is_logged_then_resumed() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());
        let quotient = |a: i64, b: i64| a / b;
        let logged = logger.wrap(qualified_name!(quotient), target(quotient)).unwrap();

        let result = panic::catch_unwind(AssertUnwindSafe(|| logged.invoke((1, 0))));
        assert!(result.is_err());

        let log = read_log(&logger);
        assert!(log.contains("args: (1, 0)"));
        assert!(log.contains("RAISED EXCEPTION"));
        assert!(log.contains("of type panic"));
        assert!(log.contains("attempt to divide by zero"));
        assert!(!log.contains("function returned:"));

        assert_eq!(logged.invoke((6, 3)).unwrap(), 2);
        assert_eq!(read_log(&logger).matches("function call:").count(), 2);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_is_reported_by_invoke() {
        let logger = CallLogger::new(LogConfig::new("/dev/full").unwrap());
        let logged = logger.wrap(qualified_name!(divide), target(divide)).unwrap();

        let result = logged.invoke((4, 2));
        assert!(matches!(result, Err(CallLogError::LogWrite { .. })));
    }

    #[test]
    fn test_close_releases_handle() {
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_in(dir.path());
        let logged = logger.wrap(qualified_name!(target_fn), target(target_fn)).unwrap();
        logged.invoke(()).unwrap();

        assert_eq!(logged.name().name(), "target_fn");
        logged.close().unwrap();
        assert!(read_log(&logger).contains("value: 42"));
    }
}
