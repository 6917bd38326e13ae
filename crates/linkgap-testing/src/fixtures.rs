//! Fixtures for synthetic log data.
//!
//! Lines are written in the format the analyzer reads:
//! `2024-01-02 03:04:05.000: INFO GET /health status 200`

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

pub const SUCCESS_MESSAGE: &str = "GET /health status 200";
pub const FAILURE_MESSAGE: &str = "GET /health status 503";

/// Builder for log text with lines placed at millisecond offsets from a base
/// time.
///
/// # Example
/// ```
/// use linkgap_testing::LogBuilder;
///
/// let log = LogBuilder::new()
///     .success_at(0)
///     .failure_at(1_000)
///     .success_at(5_000);
///
/// assert_eq!(log.lines().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct LogBuilder {
    base: NaiveDateTime,
    lines: Vec<String>,
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBuilder {
    /// Start at 2024-01-02 03:04:05.
    pub fn new() -> Self {
        let base = NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .expect("valid base time");
        Self::starting_at(base)
    }

    pub fn starting_at(base: NaiveDateTime) -> Self {
        Self {
            base,
            lines: Vec::new(),
        }
    }

    /// Timestamp the analyzer will read for a line at `offset_ms`.
    pub fn time_at(&self, offset_ms: i64) -> DateTime<Utc> {
        (self.base + TimeDelta::milliseconds(offset_ms)).and_utc()
    }

    /// Add a line whose message carries the default success marker.
    pub fn success_at(self, offset_ms: i64) -> Self {
        self.line_at(offset_ms, "INFO", SUCCESS_MESSAGE)
    }

    /// Add several success lines at once.
    pub fn successes_at(self, offsets_ms: &[i64]) -> Self {
        offsets_ms
            .iter()
            .fold(self, |builder, &offset| builder.success_at(offset))
    }

    pub fn failure_at(self, offset_ms: i64) -> Self {
        self.line_at(offset_ms, "ERROR", FAILURE_MESSAGE)
    }

    pub fn line_at(mut self, offset_ms: i64, status: &str, message: &str) -> Self {
        let ts = self.base + TimeDelta::milliseconds(offset_ms);
        self.lines.push(format!(
            "{}: {} {}",
            ts.format("%Y-%m-%d %H:%M:%S%.3f"),
            status,
            message
        ));
        self
    }

    /// Add a line verbatim.
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn build(self) -> Vec<String> {
        self.lines
    }

    /// The log as file contents, newline terminated.
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }
}
