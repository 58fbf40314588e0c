mod error;
mod options;
mod parse;
mod types;

pub use error::ConfigError;
pub use parse::load_parser_config;
pub use types::{DEFAULT_SLOW_THRESHOLD_MS, ParserConfig};
