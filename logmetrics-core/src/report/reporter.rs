use crate::conf::ParserConfig;
use crate::parser::{ParserState, StatusClass};
use crate::report::{DurationResolver, MetricObservation};

/// Turns a window's counters into observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reporter {
    durations: DurationResolver,
    include_per_bucket_rates: bool,
}

impl Reporter {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            durations: DurationResolver::new(config.use_logfile_time),
            include_per_bucket_rates: config.include_per_bucket_rates,
        }
    }

    /// Empty when the window saw no requests. Otherwise `http_badreqs`,
    /// `http_slowreqs`, `http_numreqs` and `http_reqs` in that order,
    /// followed by the per class rates when enabled.
    ///
    /// Ratios are fractions in `[0, 1]`, not percentages.
    pub fn report(&self, state: &ParserState, elapsed: f64) -> Vec<MetricObservation> {
        if state.is_empty() {
            return Vec::new();
        }

        let total = state.total_requests() as f64;

        let mut out = vec![
            MetricObservation::new(
                "http_badreqs",
                state.bad_requests() as f64 / total,
                "% Bad Requests",
            ),
            MetricObservation::new(
                "http_slowreqs",
                state.slow_requests() as f64 / total,
                "% Slow Requests",
            ),
            MetricObservation::new("http_numreqs", total, "Http Requests"),
            MetricObservation::new(
                "http_reqs",
                state.total_response_time_ms() / total,
                "Request Time (ms)",
            ),
        ];

        if self.include_per_bucket_rates {
            let duration = self
                .durations
                .effective(elapsed, state.window_start(), state.window_end());

            out.extend(StatusClass::ALL.iter().map(|class| {
                MetricObservation::new(
                    class.metric_name(),
                    state.count(*class) as f64 / duration,
                    "Responses per sec",
                )
            }));
        }

        out
    }
}
