use std::io;

use thiserror::Error;

/// Errors raised around the physics core: reading parameters, writing reports and plots.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {label}: '{value}'. Expected a number.")]
    InputParse { label: &'static str, value: String },

    #[error("expected exactly 3 arguments: <height_m> <speed_mps> <angle_deg>, got {found}")]
    ArgumentCount { found: usize },

    #[error("input ended unexpectedly (EOF)")]
    UnexpectedEof,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not draw plot: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_parse_names_the_field() {
        let err = Error::InputParse {
            label: "height",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid height: 'abc'. Expected a number.");
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn argument_count_reports_found() {
        let msg = Error::ArgumentCount { found: 2 }.to_string();
        assert!(msg.contains("got 2"));
    }
}
