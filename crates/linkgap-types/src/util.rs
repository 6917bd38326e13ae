use chrono::{DateTime, TimeDelta, Utc};
use std::fmt::Write;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Render a duration compactly: `750ms`, `2.9s`, `1m5.25s`, `1h0m3s`.
///
/// Sub-second values use the largest unit that keeps the integer part
/// non-zero. Trailing zeros of the fractional part are dropped.
pub fn format_duration(delta: TimeDelta) -> String {
    let Some(total) = delta.num_nanoseconds() else {
        // Only reachable for spans of several hundred years
        return format!("{}s", delta.num_seconds());
    };

    if total == 0 {
        return "0s".to_string();
    }

    let mut out = String::new();
    if total < 0 {
        out.push('-');
    }
    let nanos = total.unsigned_abs();

    if nanos < NANOS_PER_MICRO {
        let _ = write!(out, "{}ns", nanos);
    } else if nanos < NANOS_PER_MILLI {
        let _ = write!(out, "{}µs", decimal(nanos, NANOS_PER_MICRO));
    } else if nanos < NANOS_PER_SECOND {
        let _ = write!(out, "{}ms", decimal(nanos, NANOS_PER_MILLI));
    } else {
        let hours = nanos / NANOS_PER_HOUR;
        let minutes = (nanos % NANOS_PER_HOUR) / NANOS_PER_MINUTE;
        let seconds = decimal(nanos % NANOS_PER_MINUTE, NANOS_PER_SECOND);

        if hours > 0 {
            let _ = write!(out, "{}h{}m", hours, minutes);
        } else if minutes > 0 {
            let _ = write!(out, "{}m", minutes);
        }
        let _ = write!(out, "{}s", seconds);
    }

    out
}

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS[.fff] +0000 UTC`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    let base = ts.format("%Y-%m-%d %H:%M:%S");
    let nanos = ts.timestamp_subsec_nanos();

    if nanos == 0 {
        format!("{} +0000 UTC", base)
    } else {
        let fraction = format!("{:09}", nanos);
        format!("{}.{} +0000 UTC", base, fraction.trim_end_matches('0'))
    }
}

/// `value / unit` as a decimal string without trailing zeros.
fn decimal(value: u64, unit: u64) -> String {
    let whole = value / unit;
    let rest = value % unit;
    if rest == 0 {
        return whole.to_string();
    }

    let width = unit.ilog10() as usize;
    let digits = format!("{:0width$}", rest, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}
