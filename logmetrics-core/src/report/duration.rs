use crate::parser::parse_log_time;
use tracing::warn;

/// Picks the window length used for rate observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationResolver {
    use_log_time: bool,
}

impl DurationResolver {
    pub fn new(use_log_time: bool) -> Self {
        Self { use_log_time }
    }

    /// Window length in seconds.
    ///
    /// In log time mode this is `end - start` of the parsed timestamps, 0 when
    /// either is missing or both are the same string. Out of order logs give
    /// a negative value, which is returned as is. A timestamp that does not
    /// parse falls back to `configured`.
    pub fn resolve(&self, configured: f64, start: Option<&str>, end: Option<&str>) -> f64 {
        if !self.use_log_time {
            return configured;
        }

        let (Some(start), Some(end)) = (start, end) else {
            return 0.0;
        };

        if start == end {
            return 0.0;
        }

        match (parse_log_time(start), parse_log_time(end)) {
            (Ok(start), Ok(end)) => (end - start).num_milliseconds() as f64 / 1000.0,
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, configured, "log time unusable, using host duration");
                configured
            }
        }
    }

    /// [`resolve`](Self::resolve), with a zero duration replaced by one
    /// second so it can divide.
    pub fn effective(&self, configured: f64, start: Option<&str>, end: Option<&str>) -> f64 {
        let duration = self.resolve(configured, start, end);
        if duration == 0.0 { 1.0 } else { duration }
    }
}
