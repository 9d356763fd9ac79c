use std::num::ParseIntError;
use std::path::PathBuf;

use crate::timestamp::TimestampFormat;

/// Join and report error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} timestamp '{text}', expected {}", .format.pattern_hint())]
    Timestamp {
        text: String,
        format: TimestampFormat,
    },

    #[error("Invalid index id '{text}': {source}")]
    Id {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Missing {field} field")]
    MissingField { field: &'static str },

    #[error("{}:{line}: {source}", .path.display())]
    Line {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach file and 1-based line number to a record parse error.
    pub(crate) fn at_line(self, path: impl Into<PathBuf>, line: usize) -> Self {
        Error::Line {
            path: path.into(),
            line,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_error_display() {
        let err = Error::MissingField { field: "payload" }.at_line("data.csv", 7);
        assert_eq!(err.to_string(), "data.csv:7: Missing payload field");
    }

    #[test]
    fn test_timestamp_error_display() {
        let err = Error::Timestamp {
            text: "2020-13-01 00:00:00".into(),
            format: TimestampFormat::Data,
        };
        assert_eq!(
            err.to_string(),
            "Invalid data timestamp '2020-13-01 00:00:00', expected YYYY-MM-DD HH:MM:SS"
        );
    }
}
