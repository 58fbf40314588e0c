use crate::conf::{ConfigError, ParserConfig};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ParserFile {
    nginx_parser: Option<ParserConfig>,
}

/// Loads the `nginx_parser` block of an HCL file. A file without the block
/// yields the default config.
pub fn load_parser_config(path: &Path) -> Result<ParserConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let parsed: ParserFile = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    let config = parsed.nginx_parser.unwrap_or_default();
    config.validate()?;

    Ok(config)
}
