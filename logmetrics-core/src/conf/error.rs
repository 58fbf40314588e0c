use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("invalid parser options '{options}': {reason}")]
    ParserOptions { options: String, reason: String },

    //-------------------------------------------------------------------------
    // Pattern
    //-------------------------------------------------------------------------
    #[error("invalid line pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("line pattern '{pattern}' has no '{group}' capture group")]
    MissingCaptureGroup {
        pattern: String,
        group: &'static str,
    },

    //-------------------------------------------------------------------------
    // Values
    //-------------------------------------------------------------------------
    #[error("invalid slow request threshold {value}ms")]
    InvalidSlowThreshold { value: f64 },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
