use crate::conf::{ConfigError, ParserConfig};
use crate::parser::{LinePattern, LogParser, ParseError, ParserState};
use crate::report::{MetricObservation, Reporter};
use tracing::trace;

/// Counts response classes, slow requests and response time from nginx
/// access logs that end with `$request_time`.
#[derive(Debug, Clone)]
pub struct NginxParser {
    pattern: LinePattern,
    slow_threshold_ms: f64,
    reporter: Reporter,
    state: ParserState,
}

impl Default for NginxParser {
    fn default() -> Self {
        Self {
            pattern: LinePattern::nginx(),
            slow_threshold_ms: ParserConfig::default().slow_threshold_ms,
            reporter: Reporter::default(),
            state: ParserState::new(),
        }
    }
}

impl NginxParser {
    pub fn new(config: &ParserConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let pattern = match &config.pattern {
            Some(p) => LinePattern::compile(p)?,
            None => LinePattern::nginx(),
        };

        Ok(Self {
            pattern,
            slow_threshold_ms: config.slow_threshold_ms,
            reporter: Reporter::new(config),
            state: ParserState::new(),
        })
    }

    pub fn pattern(&self) -> &LinePattern {
        &self.pattern
    }

    /// Same configuration, empty counters.
    pub fn fresh(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            slow_threshold_ms: self.slow_threshold_ms,
            reporter: self.reporter.clone(),
            state: ParserState::new(),
        }
    }
}

impl LogParser for NginxParser {
    fn parse_line(&mut self, line: &str) -> Result<(), ParseError> {
        let record = self.pattern.extract(line)?;
        trace!(
            status = record.status,
            response_time_ms = record.response_time_ms,
            "line matched"
        );
        self.state.record(&record, self.slow_threshold_ms);
        Ok(())
    }

    fn get_state(&self, duration: f64) -> Vec<MetricObservation> {
        self.reporter.report(&self.state, duration)
    }

    fn next_window(&self) -> Box<dyn LogParser> {
        Box::new(self.fresh())
    }

    fn state(&self) -> &ParserState {
        &self.state
    }
}
