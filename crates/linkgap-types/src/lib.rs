mod interval;
mod record;
mod util;

pub use interval::{Classification, ClassifiedInterval, Interval};
pub use record::LogRecord;
pub use util::{format_duration, format_timestamp};
