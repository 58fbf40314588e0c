use crate::cli::{OutputMode, RunOptions, render_observations, run_host};
use crate::conf::ParserConfig;
use crate::parser::ParserKind;
use crate::report::MetricObservation;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::thread;
use std::time::Duration;

const LOG: &str = r#"10.0.0.1 - - [01/Jan/2020:00:00:00 +0000] "GET / HTTP/1.1" 200 612 "-" "curl/8.4.0" 0.100
10.0.0.2 - - [01/Jan/2020:00:00:01 +0000] "GET /missing HTTP/1.1" 404 0 "-" "curl/8.4.0" 0.200
this line is not an access log
10.0.0.3 - - [01/Jan/2020:00:00:02 +0000] "POST /api HTTP/1.1" 500 12 "-" "curl/8.4.0" 1.000
"#;

fn options(config: ParserConfig) -> RunOptions {
    RunOptions {
        parser: ParserKind::Nginx,
        config,
        interval: Duration::from_secs(3600),
        output: OutputMode::Json,
    }
}

fn run(input: &'static str, opts: &RunOptions) -> Vec<Value> {
    let reader: Box<dyn BufRead + Send> = Box::new(Cursor::new(input.as_bytes()));
    let mut out = Vec::new();

    run_host(reader, opts, &mut out).unwrap();

    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn names(values: &[Value]) -> Vec<&str> {
    values
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect()
}

#[test]
fn final_flush_reports_window_and_unmatched_lines() {
    let values = run(LOG, &options(ParserConfig::default()));

    assert_eq!(
        names(&values),
        vec![
            "http_badreqs",
            "http_slowreqs",
            "http_numreqs",
            "http_reqs",
            "unmatched_lines"
        ]
    );
    assert_eq!(values[2]["value"], 3.0);
    assert_eq!(values[4]["value"], 1.0);
    assert_eq!(values[4]["description"], "Unmatched lines");
}

/// Hands out one access line per read, pausing before each.
struct TrickleReader {
    remaining: usize,
    pause: Duration,
}

impl Read for TrickleReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Ok(0);
        }
        thread::sleep(self.pause);
        self.remaining -= 1;

        let line = b"10.0.0.1 - - [01/Jan/2020:00:00:00 +0000] \"GET / HTTP/1.1\" 200 612 \"-\" \"curl\" 0.100\n";
        assert!(buf.len() >= line.len());
        buf[..line.len()].copy_from_slice(line);
        Ok(line.len())
    }
}

#[test]
fn windows_rotate_while_input_keeps_coming() {
    let reader: Box<dyn BufRead + Send> = Box::new(BufReader::new(TrickleReader {
        remaining: 40,
        pause: Duration::from_millis(5),
    }));
    let opts = RunOptions {
        interval: Duration::from_millis(20),
        ..options(ParserConfig::default())
    };
    let mut out = Vec::new();

    run_host(reader, &opts, &mut out).unwrap();

    let values: Vec<Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let per_window: Vec<f64> = values
        .iter()
        .filter(|v| v["name"] == "http_numreqs")
        .map(|v| v["value"].as_f64().unwrap())
        .collect();

    assert!(per_window.len() > 1, "one window only: {per_window:?}");
    assert_eq!(per_window.iter().sum::<f64>(), 40.0);
}

#[test]
fn crlf_lines_are_accepted() {
    let input = "10.0.0.1 - - [01/Jan/2020:00:00:00 +0000] \"GET / HTTP/1.1\" 200 612 \"-\" \"curl\" 0.100\r\n";

    let values = run(input, &options(ParserConfig::default()));

    assert_eq!(
        names(&values),
        vec!["http_badreqs", "http_slowreqs", "http_numreqs", "http_reqs"]
    );
}

#[test]
fn empty_input_prints_nothing() {
    let values = run("", &options(ParserConfig::default()));

    assert!(values.is_empty());
}

#[test]
fn invalid_config_fails_before_reading() {
    let opts = options(ParserConfig {
        pattern: Some("(".to_string()),
        ..ParserConfig::default()
    });
    let reader: Box<dyn BufRead + Send> = Box::new(Cursor::new(LOG.as_bytes()));

    assert!(run_host(reader, &opts, &mut Vec::<u8>::new()).is_err());
}

#[test]
fn pretty_output_lists_every_observation() {
    let observations = vec![
        MetricObservation::new("http_numreqs", 3.0, "Http Requests"),
        MetricObservation::new("http_reqs", 433.333, "Request Time (ms)"),
    ];
    let mut out = Vec::new();

    render_observations(&mut out, OutputMode::Pretty, &observations).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("http_numreqs"));
    assert!(text.contains("433.333"));
    assert!(text.contains("Request Time (ms)"));
}
