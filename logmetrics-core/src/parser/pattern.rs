use crate::conf::ConfigError;
use crate::parser::ParseError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `address - user [time] "request" status length "referer" "agent" response_time`
///
/// Quoted fields end at the first `"`, there is no escaping.
///
/// Digits are ASCII only so every matched number also converts.
pub const NGINX_PATTERN: &str = r#"^(?P<address>[(0-9\.)]+) - (?P<user>.+) \[(?P<time>.*?)\] "(?P<request>.*?)" (?P<status>[0-9]+) (?P<length>[0-9]+) "(?P<referer>.*?)" "(?P<agent>.*?)" (?P<response_time>[0-9]+.?[0-9]+)"#;

const REQUIRED_GROUPS: &[&str] = &["time", "status", "response_time"];

static NGINX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NGINX_PATTERN).expect("built-in nginx pattern compiles"));

/// Fields pulled out of one line. Only `timestamp`, `status` and
/// `response_time_ms` feed the counters.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessRecord<'a> {
    pub address: Option<&'a str>,
    pub user: Option<&'a str>,
    pub timestamp: &'a str,
    pub request: Option<&'a str>,
    pub status: u64,
    pub length: Option<&'a str>,
    pub referer: Option<&'a str>,
    pub user_agent: Option<&'a str>,
    pub response_time_ms: f64,
}

#[derive(Debug, Clone)]
pub struct LinePattern {
    regex: Regex,
}

impl Default for LinePattern {
    fn default() -> Self {
        Self::nginx()
    }
}

impl LinePattern {
    pub fn nginx() -> Self {
        Self {
            regex: NGINX.clone(),
        }
    }

    pub fn compile(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        for group in REQUIRED_GROUPS {
            if !regex.capture_names().flatten().any(|name| name == *group) {
                return Err(ConfigError::MissingCaptureGroup {
                    pattern: pattern.to_string(),
                    group,
                });
            }
        }

        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Matches and converts a line. Nothing is returned unless every
    /// counted field converted.
    pub fn extract<'a>(&self, line: &'a str) -> Result<AccessRecord<'a>, ParseError> {
        let caps = self.regex.captures(line).ok_or_else(|| ParseError::NoMatch {
            line: line.to_string(),
        })?;

        let status_raw = required(&caps, "status", line)?;
        let status = status_raw
            .parse::<u64>()
            .map_err(|_| invalid("status", status_raw, line))?;

        let time_raw = required(&caps, "response_time", line)?;
        let seconds = time_raw
            .parse::<f64>()
            .map_err(|_| invalid("response_time", time_raw, line))?;

        Ok(AccessRecord {
            address: optional(&caps, "address"),
            user: optional(&caps, "user"),
            timestamp: required(&caps, "time", line)?,
            request: optional(&caps, "request"),
            status,
            length: optional(&caps, "length"),
            referer: optional(&caps, "referer"),
            user_agent: optional(&caps, "agent"),
            response_time_ms: seconds * 1000.0,
        })
    }
}

fn optional<'a>(caps: &Captures<'a>, name: &str) -> Option<&'a str> {
    caps.name(name).map(|m| m.as_str())
}

fn required<'a>(caps: &Captures<'a>, name: &'static str, line: &str) -> Result<&'a str, ParseError> {
    optional(caps, name).ok_or_else(|| invalid(name, "", line))
}

fn invalid(field: &'static str, value: &str, line: &str) -> ParseError {
    ParseError::InvalidField {
        field,
        value: value.to_string(),
        line: line.to_string(),
    }
}
