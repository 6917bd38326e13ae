use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One parsed log line.
///
/// Records are created once by the line parser and never mutated afterwards;
/// the detector and the classifier only ever read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Time the line was written (the log carries no zone; read as UTC)
    pub timestamp: DateTime<Utc>,

    /// Third field of the line, kept verbatim
    pub status: String,

    /// Everything after the third field
    pub message: String,
}

impl LogRecord {
    pub fn new(
        timestamp: DateTime<Utc>,
        status: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            status: status.into(),
            message: message.into(),
        }
    }

    /// Whether the message contains `marker` anywhere.
    ///
    /// This is plain substring containment: with the marker `"status 200"`,
    /// a message mentioning `"status 2001"` also counts as a success.
    pub fn is_success(&self, marker: &str) -> bool {
        self.message.contains(marker)
    }
}
