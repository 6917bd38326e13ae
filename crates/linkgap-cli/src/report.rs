use anyhow::Result;
use chrono::{DateTime, Utc};
use linkgap_engine::{AnalysisReport, ScanStats};
use linkgap_types::{Classification, ClassifiedInterval, format_duration, format_timestamp};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;

/// Plain-text report, one line per interval in detection order.
pub fn render_plain(report: &AnalysisReport, success_marker: &str, color: bool) -> String {
    let mut out = String::new();

    if report.is_empty() {
        let _ = writeln!(out, "No missing {}s in the log.", success_marker);
        return out;
    }

    let _ = writeln!(out, "Detected Events:");
    for event in &report.intervals {
        let _ = writeln!(
            out,
            "Start time: {}, Duration: {}, Classification: {}",
            format_timestamp(event.start_time()),
            format_duration(event.duration()),
            label(event.classification, color)
        );
    }
    out
}

fn label(classification: Classification, color: bool) -> String {
    if !color {
        return classification.to_string();
    }
    match classification {
        Classification::Delay => classification.yellow().to_string(),
        Classification::Disconnect => classification.red().bold().to_string(),
    }
}

#[derive(Serialize)]
struct IntervalView {
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    duration_ms: i64,
    duration: String,
    classification: Classification,
    recovery_count: usize,
}

impl From<&ClassifiedInterval> for IntervalView {
    fn from(event: &ClassifiedInterval) -> Self {
        Self {
            start_time: event.start_time(),
            end_time: event.end_time(),
            duration_ms: event.duration().num_milliseconds(),
            duration: format_duration(event.duration()),
            classification: event.classification,
            recovery_count: event.recovery_count,
        }
    }
}

#[derive(Serialize)]
struct ReportView<'a> {
    intervals: Vec<IntervalView>,
    stats: &'a ScanStats,
}

/// JSON report with the raw interval bounds and scan counters.
pub fn render_json(report: &AnalysisReport) -> Result<String> {
    let view = ReportView {
        intervals: report.intervals.iter().map(IntervalView::from).collect(),
        stats: &report.stats,
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkgap_engine::{AnalysisConfig, MemorySource, analyze};
    use linkgap_testing::LogBuilder;

    fn report_for(log: LogBuilder) -> AnalysisReport {
        analyze(MemorySource::new(log.build()), &AnalysisConfig::default()).unwrap()
    }

    fn sample_report() -> AnalysisReport {
        report_for(
            LogBuilder::new()
                .success_at(0)
                .success_at(5_000)
                .success_at(6_000)
                .success_at(10_250)
                .successes_at(&[10_300, 10_400, 10_500, 10_600]),
        )
    }

    #[test]
    fn test_plain_report() {
        let output = render_plain(&sample_report(), "status 200", false);
        insta::assert_snapshot!(output, @r"
        Detected Events:
        Start time: 2024-01-02 03:04:05 +0000 UTC, Duration: 5s, Classification: Disconnect
        Start time: 2024-01-02 03:04:11 +0000 UTC, Duration: 4.25s, Classification: Delay
        ");
    }

    #[test]
    fn test_plain_report_without_events() {
        let report = report_for(LogBuilder::new().success_at(0).success_at(1_000));
        let output = render_plain(&report, "status 200", false);
        insta::assert_snapshot!(output, @"No missing status 200s in the log.");
    }

    #[test]
    fn test_plain_report_uses_configured_marker() {
        let report = report_for(LogBuilder::new());
        let output = render_plain(&report, "HTTP 200", false);
        assert_eq!(output, "No missing HTTP 200s in the log.\n");
    }

    #[test]
    fn test_colored_labels_keep_text() {
        let output = render_plain(&sample_report(), "status 200", true);
        assert!(output.contains("Disconnect"));
        assert!(output.contains("Delay"));
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let intervals = value["intervals"].as_array().unwrap();
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0]["classification"], "Disconnect");
        assert_eq!(intervals[0]["duration_ms"], 5_000);
        assert_eq!(intervals[0]["duration"], "5s");
        assert_eq!(intervals[1]["classification"], "Delay");
        assert_eq!(intervals[1]["recovery_count"], 4);
        assert_eq!(value["stats"]["lines_read"], 8);
        assert_eq!(value["stats"]["success_records"], 8);
    }
}
