use std::{io, num::ParseFloatError};

use thiserror::Error;

/// Errors raised while reading a playlist. Every variant except `Io` carries the
/// raw line that could not be parsed.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("m3u: wrongly-formatted line: {line}")]
    Format { line: String },

    #[error("m3u: invalid duration '{value}' on the line '{line}'")]
    NumberFormat {
        value: String,
        line: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("m3u: wrongly-formatted attribute '{attribute}' on the line '{line}'")]
    AttributeFormat { attribute: String, line: String },

    #[error("m3u: unknown line {line}")]
    UnknownDirective { line: String },
}

impl ParseError {
    /// The offending line, if the error came from the content rather than the stream
    pub fn line(&self) -> Option<&str> {
        match self {
            Self::Io(_) => None,
            Self::Format { line }
            | Self::NumberFormat { line, .. }
            | Self::AttributeFormat { line, .. }
            | Self::UnknownDirective { line } => Some(line.as_str()),
        }
    }
}
