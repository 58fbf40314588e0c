use crate::parser::AccessRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusClass {
    pub const ALL: [StatusClass; 5] = [
        StatusClass::Informational,
        StatusClass::Success,
        StatusClass::Redirection,
        StatusClass::ClientError,
        StatusClass::ServerError,
    ];

    /// Anything below 200 (including codes under 100) is informational and
    /// anything from 500 up is a server error.
    pub fn from_status(status: u64) -> Self {
        match status {
            0..=199 => StatusClass::Informational,
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirection,
            400..=499 => StatusClass::ClientError,
            _ => StatusClass::ServerError,
        }
    }

    pub fn metric_name(self) -> &'static str {
        match self {
            StatusClass::Informational => "http_1xx",
            StatusClass::Success => "http_2xx",
            StatusClass::Redirection => "http_3xx",
            StatusClass::ClientError => "http_4xx",
            StatusClass::ServerError => "http_5xx",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Running counters for one reporting window.
///
/// `total_requests` always equals the sum of the five class counters and
/// `slow_requests` never exceeds it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParserState {
    classes: [u64; 5],
    total_requests: u64,
    total_response_time_ms: f64,
    slow_requests: u64,
    window_start: Option<String>,
    window_end: Option<String>,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, record: &AccessRecord<'_>, slow_threshold_ms: f64) {
        self.classes[StatusClass::from_status(record.status).index()] += 1;
        self.total_requests += 1;
        self.total_response_time_ms += record.response_time_ms;

        if record.response_time_ms > slow_threshold_ms {
            self.slow_requests += 1;
        }

        if self.window_start.is_none() {
            self.window_start = Some(record.timestamp.to_string());
        }
        self.window_end = Some(record.timestamp.to_string());
    }

    pub fn count(&self, class: StatusClass) -> u64 {
        self.classes[class.index()]
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    pub fn total_response_time_ms(&self) -> f64 {
        self.total_response_time_ms
    }

    pub fn slow_requests(&self) -> u64 {
        self.slow_requests
    }

    pub fn bad_requests(&self) -> u64 {
        self.count(StatusClass::ClientError) + self.count(StatusClass::ServerError)
    }

    pub fn window_start(&self) -> Option<&str> {
        self.window_start.as_deref()
    }

    pub fn window_end(&self) -> Option<&str> {
        self.window_end.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.total_requests == 0
    }
}
