pub mod tracing;

pub use self::tracing::{CapturedEvent, captured_events, init_test_tracing};

use logmetrics_core::parser::LogParser;
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn fixture_lines(file: &str) -> Vec<String> {
    fs::read_to_string(fixture_path(file))
        .expect("failed to read fixture")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Feeds every line, returning how many were rejected.
pub fn feed(parser: &mut dyn LogParser, lines: &[String]) -> u64 {
    lines
        .iter()
        .filter(|line| parser.parse_line(line).is_err())
        .count() as u64
}
