use crate::{Error, Result};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GAP_THRESHOLD_MS: u64 = 2_900;
pub const DEFAULT_LOOKAHEAD_MS: u64 = 2_000;
pub const DEFAULT_DELAY_COUNT_THRESHOLD: usize = 3;
pub const DEFAULT_SUCCESS_MARKER: &str = "status 200";

/// Knobs for gap detection and classification.
///
/// Deserializes from the `[analysis]` table of the config file; every field
/// is optional there and falls back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// A gap must be strictly longer than this to become an interval
    pub gap_threshold_ms: u64,

    /// Length of the window after a gap in which recovery is counted
    pub lookahead_ms: u64,

    /// More recoveries than this inside the window means `Delay`
    pub delay_count_threshold: usize,

    /// Substring marking a successful request in the message
    pub success_marker: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            gap_threshold_ms: DEFAULT_GAP_THRESHOLD_MS,
            lookahead_ms: DEFAULT_LOOKAHEAD_MS,
            delay_count_threshold: DEFAULT_DELAY_COUNT_THRESHOLD,
            success_marker: DEFAULT_SUCCESS_MARKER.to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn gap_threshold(&self) -> TimeDelta {
        millis(self.gap_threshold_ms)
    }

    pub fn lookahead_window(&self) -> TimeDelta {
        millis(self.lookahead_ms)
    }

    pub fn validate(&self) -> Result<()> {
        // An empty marker would match every line
        if self.success_marker.is_empty() {
            return Err(Error::Config(
                "success_marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn millis(ms: u64) -> TimeDelta {
    i64::try_from(ms)
        .ok()
        .and_then(TimeDelta::try_milliseconds)
        .unwrap_or(TimeDelta::MAX)
}
