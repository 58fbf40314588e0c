use crate::report::MetricObservation;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Pretty,
    Json,
}

pub fn default_output_mode() -> OutputMode {
    if io::stdout().is_terminal() {
        OutputMode::Pretty
    } else {
        OutputMode::Json
    }
}

pub fn render_observations(
    out: &mut impl Write,
    mode: OutputMode,
    observations: &[MetricObservation],
) -> io::Result<()> {
    match mode {
        OutputMode::Json => {
            for obs in observations {
                let line = serde_json::to_string(obs).map_err(io::Error::other)?;
                writeln!(out, "{line}")?;
            }
        }
        OutputMode::Pretty => {
            for obs in observations {
                writeln!(
                    out,
                    "{:<16} {:>14.3}  {}",
                    obs.name.bold(),
                    obs.value,
                    obs.description.dimmed()
                )?;
            }
            if !observations.is_empty() {
                writeln!(out)?;
            }
        }
    }
    out.flush()
}
