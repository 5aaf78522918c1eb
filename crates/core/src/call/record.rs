use std::fmt;

use chrono::{DateTime, Local, SubsecRound, TimeDelta, Timelike};

use super::args::RenderedArgs;
use super::outcome::Outcome;

/// Module path plus function name, used to attribute log blocks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    module: String,
    name: String,
}

impl QualifiedName {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.module.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}::{}", self.module, self.name)
        }
    }
}

/// Metadata for one logged call. Built per call, rendered, then dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationRecord {
    pub function: QualifiedName,
    pub args: RenderedArgs,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub outcome: Outcome,
}

impl InvocationRecord {
    /// Create a record.
    ///
    /// Timestamps are truncated to microseconds, the precision they are
    /// rendered with. A finish time earlier than the start (wall clock
    /// stepped back) is clamped to the start.
    pub fn new(
        function: QualifiedName,
        args: RenderedArgs,
        started_at: DateTime<Local>,
        finished_at: DateTime<Local>,
        outcome: Outcome,
    ) -> Self {
        let started_at = started_at.trunc_subsecs(6);
        let finished_at = finished_at.trunc_subsecs(6).max(started_at);

        Self {
            function,
            args,
            started_at,
            finished_at,
            outcome,
        }
    }

    pub fn elapsed(&self) -> TimeDelta {
        self.finished_at - self.started_at
    }

    /// Render the human-readable block appended to the call log.
    ///
    /// ```text
    ///
    /// 2024-05-01 10:00:00.000001
    ///     function call: demo::divide
    ///     args: (1, 0)
    ///     kwargs: {}
    ///     end time: 2024-05-01 10:00:00.000013
    ///     elapsed: 0:00:00.000012
    ///     RAISED EXCEPTION
    ///     of type demo::ZeroDivisionError
    ///     args: ('division by zero',)
    /// ```
    pub fn render(&self) -> String {
        let mut block = format!(
            "\n{started}\n    function call: {function}\n    args: {args}\n    kwargs: {kwargs}\n    end time: {finished}\n    elapsed: {elapsed}\n",
            started = format_timestamp(&self.started_at),
            function = self.function,
            args = self.args.positional,
            kwargs = self.args.keywords,
            finished = format_timestamp(&self.finished_at),
            elapsed = format_elapsed(self.elapsed()),
        );

        match &self.outcome {
            Outcome::Raised { type_name, args } => {
                block.push_str(&format!(
                    "    RAISED EXCEPTION\n    of type {type_name}\n    args: {args}\n"
                ));
            }
            Outcome::Returned { type_name, value } => {
                block.push_str(&format!(
                    "    function returned: {type_name}, value: {value}\n"
                ));
            }
        }

        block
    }
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS[.ffffff]`.
///
/// The fraction is left out when the timestamp falls on a whole second.
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    if timestamp.nanosecond() == 0 {
        timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        timestamp.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

/// Format a duration as `[D day(s), ]H:MM:SS[.ffffff]`.
///
/// Negative durations render as zero.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let micros = elapsed.num_microseconds().unwrap_or(i64::MAX).max(0);
    let fraction = micros % 1_000_000;
    let total_secs = micros / 1_000_000;

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let mut out = String::new();
    if days > 0 {
        let plural = if days == 1 { "" } else { "s" };
        out.push_str(&format!("{days} day{plural}, "));
    }
    out.push_str(&format!("{hours}:{minutes:02}:{seconds:02}"));
    if fraction > 0 {
        out.push_str(&format!(".{fraction:06}"));
    }
    out
}
