use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A gap between two consecutive success records that exceeded the
/// configured threshold.
///
/// `end_time - start_time` is always above the threshold the detector ran
/// with, so `end_time` is strictly after `start_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Timestamp of the last success record before the gap
    pub start_time: DateTime<Utc>,

    /// Timestamp of the first success record after the gap
    pub end_time: DateTime<Utc>,
}

impl Interval {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

/// Label assigned to an interval from the recovery that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// A burst of successes right after the gap: requests were held up, not lost
    Delay,
    /// Sparse recovery after the gap: the connection was actually down
    Disconnect,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Delay => "Delay",
            Classification::Disconnect => "Disconnect",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An interval together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedInterval {
    #[serde(flatten)]
    pub interval: Interval,

    pub classification: Classification,

    /// Success records counted inside the lookahead window
    pub recovery_count: usize,
}

impl ClassifiedInterval {
    pub fn start_time(&self) -> DateTime<Utc> {
        self.interval.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.interval.end_time
    }

    pub fn duration(&self) -> TimeDelta {
        self.interval.duration()
    }
}
