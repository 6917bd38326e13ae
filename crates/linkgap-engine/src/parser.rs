use chrono::{DateTime, NaiveDateTime, Utc};
use linkgap_types::LogRecord;

/// Layout of the reconstructed `<date> <time>` text. The fractional part is
/// optional.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Parse one log line of the form
/// `<date> <time><delimiter> <status> <message...>`.
///
/// Returns `None` when the line has fewer than four space-separated fields or
/// when the timestamp does not match [`TIMESTAMP_LAYOUT`].
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut fields = line.splitn(4, ' ');
    let date = fields.next()?;
    let time = fields.next()?;
    let status = fields.next()?;
    let message = fields.next()?;

    let timestamp = parse_timestamp(date, time)?;
    Some(LogRecord::new(timestamp, status, message))
}

/// The time field carries one trailing delimiter character (usually `:`),
/// which is dropped whatever it is.
fn parse_timestamp(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let mut chars = time.chars();
    chars.next_back()?;
    let time = chars.as_str();

    // chrono accepts single-digit fields; the layout is fixed width
    if !matches_shape(date, "dddd-dd-dd") || !is_fixed_width_time(time) {
        return None;
    }

    let text = format!("{} {}", date, time);
    NaiveDateTime::parse_from_str(&text, TIMESTAMP_LAYOUT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// `HH:MM:SS` optionally followed by `.` and at least one digit.
fn is_fixed_width_time(time: &str) -> bool {
    let (clock, fraction) = match time.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (time, None),
    };

    matches_shape(clock, "dd:dd:dd")
        && fraction.is_none_or(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
}

/// `d` in `shape` stands for an ASCII digit; every other byte must match as is.
fn matches_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text.bytes().zip(shape.bytes()).all(|(t, s)| match s {
            b'd' => t.is_ascii_digit(),
            _ => t == s,
        })
}

/// Line parser that keeps count of what it has seen.
#[derive(Debug, Default)]
pub struct LineParser {
    lines_read: usize,
    skipped: usize,
}

impl LineParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, line: &str) -> Option<LogRecord> {
        self.lines_read += 1;

        let record = parse_line(line);
        if record.is_none() {
            self.skipped += 1;
            tracing::trace!(line_no = self.lines_read, "skipping unparseable line");
        }
        record
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_parse_basic_line() {
        let record = parse_line("2024-01-02 03:04:05.123: INFO request done status 200").unwrap();

        let expected = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
            + chrono::TimeDelta::milliseconds(123);
        assert_eq!(record.timestamp, expected);
        assert_eq!(record.status, "INFO");
        assert_eq!(record.message, "request done status 200");
    }

    #[test]
    fn test_status_is_third_field_verbatim() {
        // The third field is always the status, even when it reads "status"
        let record = parse_line("2024-01-02 03:04:05.123: status 200 GET /health").unwrap();
        assert_eq!(record.status, "status");
        assert_eq!(record.message, "200 GET /health");
        assert!(!record.is_success("status 200"));
    }

    #[test]
    fn test_fraction_is_optional() {
        let record = parse_line("2024-01-02 03:04:05: INFO ok").unwrap();
        assert_eq!(record.timestamp.nanosecond(), 0);
        assert_eq!(record.timestamp.second(), 5);
    }

    #[test]
    fn test_any_trailing_delimiter_is_stripped() {
        let colon = parse_line("2024-01-02 03:04:05.5: INFO ok").unwrap();
        let bracket = parse_line("2024-01-02 03:04:05.5] INFO ok").unwrap();
        assert_eq!(colon.timestamp, bracket.timestamp);
    }

    #[test]
    fn test_missing_delimiter_rejected() {
        // Stripping the delimiter would eat the last digit of the seconds
        assert!(parse_line("2024-01-02 03:04:05 INFO ok").is_none());
        assert!(parse_line("2024-01-02 03:04:16 INFO status 200").is_none());
        // Only a trailing fraction digit is lost here, so the line still parses
        let record = parse_line("2024-01-02 03:04:05.50 INFO ok").unwrap();
        assert_eq!(record.timestamp.second(), 5);
    }

    #[test]
    fn test_unpadded_fields_rejected() {
        assert!(parse_line("2024-1-2 3:4:5.5: INFO ok").is_none());
        assert!(parse_line("2024-01-02 3:04:05: INFO ok").is_none());
        assert!(parse_line("24-01-02 03:04:05: INFO ok").is_none());
        assert!(parse_line("2024-01-02 03:04:05.: INFO ok").is_none());
        assert!(parse_line("2024-01-02 03:04:05.12x: INFO ok").is_none());
    }

    #[test]
    fn test_long_fraction_accepted() {
        let record = parse_line("2024-01-02 03:04:05.123456: INFO ok").unwrap();
        assert_eq!(record.timestamp.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_fewer_than_four_fields_rejected() {
        assert!(parse_line("").is_none());
        assert!(parse_line("2024-01-02").is_none());
        assert!(parse_line("2024-01-02 03:04:05.123:").is_none());
        assert!(parse_line("2024-01-02 03:04:05.123: INFO").is_none());
    }

    #[test]
    fn test_message_keeps_inner_spaces() {
        let record = parse_line("2024-01-02 03:04:05.123: INFO a  b   c ").unwrap();
        assert_eq!(record.message, "a  b   c ");
    }

    #[test]
    fn test_double_space_yields_empty_field() {
        // Fields are split on single spaces; an empty time field has nothing to strip
        assert!(parse_line("2024-01-02  03:04:05.123: INFO ok").is_none());
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        assert!(parse_line("yesterday 03:04:05.123: INFO status 200").is_none());
        assert!(parse_line("2024-13-02 03:04:05.123: INFO status 200").is_none());
        assert!(parse_line("2024-01-02 25:04:05.123: INFO status 200").is_none());
    }

    #[test]
    fn test_carriage_return_stripped() {
        let record = parse_line("2024-01-02 03:04:05.123: INFO status 200\r").unwrap();
        assert_eq!(record.message, "status 200");
    }

    #[test]
    fn test_parse_is_pure() {
        let line = "2024-01-02 03:04:05.123: INFO status 200 GET /";
        assert_eq!(parse_line(line), parse_line(line));
    }

    #[test]
    fn test_line_parser_counts() {
        let mut parser = LineParser::new();
        assert!(parser.parse("2024-01-02 03:04:05.123: INFO ok").is_some());
        assert!(parser.parse("garbage").is_none());
        assert!(parser.parse("").is_none());

        assert_eq!(parser.lines_read(), 3);
        assert_eq!(parser.skipped(), 2);
    }
}
