use crate::classifier::Classifier;
use crate::config::AnalysisConfig;
use crate::detector::{GapDetector, detect};
use crate::parser::LineParser;
use crate::source::LineSource;
use crate::Result;
use linkgap_types::{Classification, ClassifiedInterval, LogRecord};
use serde::Serialize;

/// Counters collected while reading the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub lines_read: usize,
    pub records: usize,
    pub skipped_lines: usize,
    pub success_records: usize,
}

/// Outcome of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Classified intervals in the order the gaps occurred
    pub intervals: Vec<ClassifiedInterval>,
    pub stats: ScanStats,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn count(&self, classification: Classification) -> usize {
        self.intervals
            .iter()
            .filter(|i| i.classification == classification)
            .count()
    }
}

/// Read every line from `source`, detect gaps and classify them.
///
/// Any read error aborts the run; nothing is returned for the lines read
/// before it.
pub fn analyze<S: LineSource>(source: S, config: &AnalysisConfig) -> Result<AnalysisReport> {
    config.validate()?;

    let lines = source.open()?;
    let mut parser = LineParser::new();
    let mut detector = GapDetector::new(config);
    let mut records: Vec<LogRecord> = Vec::new();
    let mut success_records = 0;

    for line in lines {
        let line = line?;
        let Some(record) = parser.parse(&line) else {
            continue;
        };

        if record.is_success(&config.success_marker) {
            success_records += 1;
        }
        detector.observe(&record);
        records.push(record);
    }

    let stats = ScanStats {
        lines_read: parser.lines_read(),
        records: records.len(),
        skipped_lines: parser.skipped(),
        success_records,
    };

    let classifier = Classifier::new(&records, config);
    let intervals: Vec<ClassifiedInterval> = detector
        .finish()
        .iter()
        .map(|interval| classifier.classify(interval))
        .collect();

    let report = AnalysisReport { intervals, stats };
    tracing::info!(
        lines = stats.lines_read,
        skipped = stats.skipped_lines,
        intervals = report.intervals.len(),
        delays = report.count(Classification::Delay),
        disconnects = report.count(Classification::Disconnect),
        "analysis complete"
    );

    Ok(report)
}

/// Detect and classify over records that are already parsed.
pub fn analyze_records(records: &[LogRecord], config: &AnalysisConfig) -> Vec<ClassifiedInterval> {
    let classifier = Classifier::new(records, config);
    detect(records, config)
        .iter()
        .map(|interval| classifier.classify(interval))
        .collect()
}
