//! Line Parsers
//!
//! A parser owns one reporting window. The host feeds it raw lines one at a
//! time through [`LogParser::parse_line`], asks it for observations with
//! [`LogParser::get_state`] and then replaces it with
//! [`LogParser::next_window`].
//!
//! stdin
//! parse_line
//! ParserState
//! Reporter
//! MetricObservation

mod error;
mod nginx;
mod pattern;
mod state;
#[cfg(test)]
pub(crate) mod tests;
mod timestamp;

pub use error::{ParseError, TimestampParseError};
pub use nginx::NginxParser;
pub use pattern::{AccessRecord, LinePattern, NGINX_PATTERN};
pub use state::{ParserState, StatusClass};
pub use timestamp::{LOG_TIME_FORMAT, parse_log_time};

use crate::conf::{ConfigError, ParserConfig};
use crate::report::MetricObservation;
use clap::ValueEnum;

pub trait LogParser {
    /// Digests one line. A failed line leaves the window untouched.
    fn parse_line(&mut self, line: &str) -> Result<(), ParseError>;

    /// Observations for the window so far. `duration` is the wall-clock
    /// length of the window in seconds.
    fn get_state(&self, duration: f64) -> Vec<MetricObservation>;

    /// A fresh, empty parser with the same configuration.
    fn next_window(&self) -> Box<dyn LogParser>;

    fn state(&self) -> &ParserState;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ParserKind {
    /// nginx access log with a trailing request time
    #[default]
    Nginx,
}

impl ParserKind {
    pub fn build(self, config: &ParserConfig) -> Result<Box<dyn LogParser>, ConfigError> {
        match self {
            ParserKind::Nginx => Ok(Box::new(NginxParser::new(config)?)),
        }
    }
}
