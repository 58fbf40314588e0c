use crate::parser::TimestampParseError;
use chrono::{DateTime, NaiveDateTime, Utc};

/// `01/Jan/2020:00:00:05 +0000`. The offset is matched literally.
pub const LOG_TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S +0000";

pub fn parse_log_time(value: &str) -> Result<DateTime<Utc>, TimestampParseError> {
    NaiveDateTime::parse_from_str(value, LOG_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| TimestampParseError {
            value: value.to_string(),
            source,
        })
}
