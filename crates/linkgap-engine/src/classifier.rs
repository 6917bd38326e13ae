use crate::config::AnalysisConfig;
use chrono::{DateTime, Utc};
use linkgap_types::{Classification, ClassifiedInterval, Interval, LogRecord};

/// Labels intervals by how many success records follow them.
///
/// Success timestamps are collected and sorted once, so each interval costs
/// two binary searches instead of a scan over every record. Counts do not
/// depend on the order the records arrived in.
#[derive(Debug)]
pub struct Classifier<'a> {
    config: &'a AnalysisConfig,
    success_times: Vec<DateTime<Utc>>,
}

impl<'a> Classifier<'a> {
    pub fn new(records: &[LogRecord], config: &'a AnalysisConfig) -> Self {
        let mut success_times: Vec<DateTime<Utc>> = records
            .iter()
            .filter(|record| record.is_success(&config.success_marker))
            .map(|record| record.timestamp)
            .collect();
        success_times.sort_unstable();

        Self {
            config,
            success_times,
        }
    }

    /// Success records strictly inside `(after, after + lookahead)`.
    pub fn recovery_count(&self, after: DateTime<Utc>) -> usize {
        let window_end = after
            .checked_add_signed(self.config.lookahead_window())
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let first = self.success_times.partition_point(|t| *t <= after);
        let last = self.success_times.partition_point(|t| *t < window_end);
        last.saturating_sub(first)
    }

    pub fn classify(&self, interval: &Interval) -> ClassifiedInterval {
        let recovery_count = self.recovery_count(interval.end_time);
        let classification = if recovery_count > self.config.delay_count_threshold {
            Classification::Delay
        } else {
            Classification::Disconnect
        };

        ClassifiedInterval {
            interval: *interval,
            classification,
            recovery_count,
        }
    }
}

/// Classify a single interval against the full record list.
///
/// Prefer [`Classifier`] when labelling several intervals over the same
/// records.
pub fn classify(
    interval: &Interval,
    records: &[LogRecord],
    config: &AnalysisConfig,
) -> ClassifiedInterval {
    Classifier::new(records, config).classify(interval)
}
