use crate::conf::{ConfigError, ParserConfig};
use clap::Parser;

/// Classic single-string parser options, e.g. `"--lt --per-bucket-rates"`.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true)]
struct ParserOptions {
    /// Use log file parsed times instead of the host supplied duration
    #[arg(long = "use-logfile-time", alias = "lt")]
    use_logfile_time: bool,

    /// Emit responses-per-second for every status class
    #[arg(long = "per-bucket-rates")]
    per_bucket_rates: bool,
}

impl ParserConfig {
    /// Builds a config from an option string. An empty string yields the
    /// defaults.
    pub fn from_option_string(options: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_option_string(options)?;
        Ok(config)
    }

    /// Turns on every flag named in `options`. Flags never switch a setting
    /// off, so file values stay in place unless overridden.
    pub fn apply_option_string(&mut self, options: &str) -> Result<(), ConfigError> {
        let parsed = ParserOptions::try_parse_from(options.split_whitespace()).map_err(|e| {
            ConfigError::ParserOptions {
                options: options.to_string(),
                reason: e
                    .to_string()
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .trim_start_matches("error: ")
                    .to_string(),
            }
        })?;

        self.use_logfile_time |= parsed.use_logfile_time;
        self.include_per_bucket_rates |= parsed.per_bucket_rates;
        Ok(())
    }
}
