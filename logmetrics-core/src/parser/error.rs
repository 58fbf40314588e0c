use thiserror::Error;

/// A line that could not be turned into counter updates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line does not match pattern: {line:?}")]
    NoMatch { line: String },

    #[error("invalid {field} '{value}' in line {line:?}")]
    InvalidField {
        field: &'static str,
        value: String,
        line: String,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid log timestamp '{value}': {source}")]
pub struct TimestampParseError {
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}
