use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read trace log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read trace line {line_no}: {source}")]
    Read {
        line_no: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed line {line_no}: need at least {needed} tokens, found {found}")]
    MalformedLine {
        line_no: usize,
        needed: usize,
        found: usize,
    },

    #[error("line {line_no}: payload '{token}' is not an integer")]
    InvalidNumber { line_no: usize, token: String },

    #[error("no {series} samples in trace, cannot compute averages")]
    NoData { series: &'static str },
}

impl AnalysisError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
