use crate::cli::constants::{LINE_BUFFER, LOOP_IDLE_SLEEP};
use crate::cli::render::{OutputMode, render_observations};
use crate::conf::ParserConfig;
use crate::parser::{LogParser, ParserKind};
use crate::report::MetricObservation;
use anyhow::{Result, anyhow};
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct RunOptions {
    pub parser: ParserKind,
    pub config: ParserConfig,
    pub interval: Duration,
    pub output: OutputMode,
}

struct Window {
    parser: Box<dyn LogParser>,
    opened: Instant,
    lines: u64,
    unmatched: u64,
}

impl Window {
    fn open(parser: Box<dyn LogParser>) -> Self {
        Self {
            parser,
            opened: Instant::now(),
            lines: 0,
            unmatched: 0,
        }
    }

    fn feed(&mut self, line: &str) {
        self.lines += 1;
        if let Err(e) = self.parser.parse_line(line) {
            self.unmatched += 1;
            debug!(error = %e, "unmatched line");
        }
    }

    fn next(&self) -> Self {
        Self::open(self.parser.next_window())
    }

    fn close(self) -> Vec<MetricObservation> {
        let elapsed = self.opened.elapsed().as_secs_f64();
        let mut observations = self.parser.get_state(elapsed);

        if self.unmatched > 0 {
            observations.push(MetricObservation::new(
                "unmatched_lines",
                self.unmatched as f64,
                "Unmatched lines",
            ));
        }

        info!(
            lines = self.lines,
            requests = self.parser.state().total_requests(),
            unmatched = self.unmatched,
            elapsed_secs = elapsed,
            "window closed"
        );

        observations
    }
}

/// Reads `input` to the end, reporting every `interval` and once more when
/// the input is exhausted.
pub fn run_host(
    input: Box<dyn BufRead + Send>,
    opts: &RunOptions,
    out: &mut impl Write,
) -> Result<()> {
    let mut window = Window::open(opts.parser.build(&opts.config)?);

    // Bounded channel from reader thread -> parse loop, the reader blocks
    // once the parser falls behind.
    let (tx, rx) = mpsc::sync_channel::<String>(LINE_BUFFER);

    let reader_handle = thread::spawn(move || read_lines(input, tx));

    loop {
        let mut disconnected = false;
        let mut idle = false;

        // Drain lines until the channel is empty or the window is due.
        loop {
            match rx.try_recv() {
                Ok(line) => {
                    window.feed(&line);
                    if window.opened.elapsed() >= opts.interval {
                        break;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => {
                    idle = true;
                    break;
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if window.opened.elapsed() >= opts.interval {
            let next = window.next();
            let closed = std::mem::replace(&mut window, next);
            render_observations(out, opts.output, &closed.close())?;
        }

        if disconnected {
            break;
        }

        if idle {
            thread::sleep(LOOP_IDLE_SLEEP);
        }
    }

    render_observations(out, opts.output, &window.close())?;

    reader_handle
        .join()
        .map_err(|_| anyhow!("log reader thread panicked"))??;

    Ok(())
}

fn read_lines(
    mut input: Box<dyn BufRead + Send>,
    tx: mpsc::SyncSender<String>,
) -> io::Result<()> {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }

        // Access logs are not guaranteed to be UTF-8.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']).to_string();

        // If receiver is gone, stop early.
        if tx.send(line).is_err() {
            return Ok(());
        }
    }
}
