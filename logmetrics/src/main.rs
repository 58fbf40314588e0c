use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use logmetrics_core::cli::{self, OutputMode, RunOptions, default_output_mode, run_host};
use logmetrics_core::conf::{ParserConfig, load_parser_config};
use logmetrics_core::logging::init_logging;
use logmetrics_core::parser::ParserKind;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "logmetrics",
    version,
    about = "logmetrics: access log metrics extractor"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse access log lines and print metrics every interval
    Run {
        /// Log file to read. Reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// HCL file with an `nginx_parser` block
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ParserKind::Nginx)]
        parser: ParserKind,

        /// Seconds between reports
        #[arg(long, default_value_t = cli::DEFAULT_INTERVAL.as_secs())]
        interval: u64,

        /// Derive the window duration from log timestamps
        #[arg(long)]
        use_logfile_time: bool,

        /// Also report responses per second for every status class
        #[arg(long)]
        per_bucket_rates: bool,

        /// Classic parser option string, e.g. "--lt"
        #[arg(long, allow_hyphen_values = true)]
        parser_options: Option<String>,

        #[arg(long, value_enum)]
        output: Option<OutputMode>,
    },

    /// Validate a parser config file
    Check {
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    match cli.command {
        Command::Run {
            input,
            config,
            parser,
            interval,
            use_logfile_time,
            per_bucket_rates,
            parser_options,
            output,
        } => {
            let mut cfg = match &config {
                Some(path) => load_parser_config(path)?,
                None => ParserConfig::default(),
            };

            if let Some(options) = &parser_options {
                cfg.apply_option_string(options)?;
            }
            cfg.use_logfile_time |= use_logfile_time;
            cfg.include_per_bucket_rates |= per_bucket_rates;

            let reader: Box<dyn BufRead + Send> = match &input {
                Some(path) => Box::new(BufReader::new(
                    File::open(path)
                        .with_context(|| format!("failed to open log file {}", path.display()))?,
                )),
                None => Box::new(BufReader::new(io::stdin())),
            };

            let opts = RunOptions {
                parser,
                config: cfg,
                interval: Duration::from_secs(interval.max(1)),
                output: output.unwrap_or_else(default_output_mode),
            };

            run_host(reader, &opts, &mut io::stdout().lock())
        }

        Command::Check { config } => cli::check(&config),
    }
}
