use crate::config::AnalysisConfig;
use chrono::{DateTime, TimeDelta, Utc};
use linkgap_types::{Interval, LogRecord};

/// Incremental gap detector.
///
/// Feed records in arrival order with [`GapDetector::observe`]. Only success
/// records move the cursor; every success record becomes the new baseline,
/// whether or not it closed a gap.
#[derive(Debug)]
pub struct GapDetector<'a> {
    marker: &'a str,
    threshold: TimeDelta,
    last_success: Option<DateTime<Utc>>,
    intervals: Vec<Interval>,
}

impl<'a> GapDetector<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self {
            marker: &config.success_marker,
            threshold: config.gap_threshold(),
            last_success: None,
            intervals: Vec::new(),
        }
    }

    /// Returns the interval closed by this record, if any.
    pub fn observe(&mut self, record: &LogRecord) -> Option<Interval> {
        if !record.is_success(self.marker) {
            return None;
        }

        let current = record.timestamp;
        let closed = self
            .last_success
            .filter(|&previous| current - previous > self.threshold)
            .map(|previous| Interval::new(previous, current));

        if let Some(interval) = closed {
            tracing::debug!(
                start = %interval.start_time,
                end = %interval.end_time,
                "gap detected"
            );
            self.intervals.push(interval);
        }

        self.last_success = Some(current);
        closed
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn finish(self) -> Vec<Interval> {
        self.intervals
    }
}

/// Find every gap between consecutive success records that is strictly
/// longer than the configured threshold.
pub fn detect(records: &[LogRecord], config: &AnalysisConfig) -> Vec<Interval> {
    let mut detector = GapDetector::new(config);
    for record in records {
        detector.observe(record);
    }
    detector.finish()
}
