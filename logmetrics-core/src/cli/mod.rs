//! Host Loop
//!
//! A small host around the parsers: it reads lines from a file or stdin,
//! feeds them to the active parser window and, on every interval tick, swaps
//! in a fresh window and prints what the old one reported.
//!
//! reader thread
//! LogParser::parse_line
//! LogParser::get_state
//! render_observations

mod check;
mod constants;
mod render;
mod run;
#[cfg(test)]
mod tests;

pub use check::check;
pub use constants::DEFAULT_INTERVAL;
pub use render::{OutputMode, default_output_mode, render_observations};
pub use run::{RunOptions, run_host};
