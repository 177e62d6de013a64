use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

/// Every way a benchmark batch can fail. Nothing is recovered locally, the
/// first error ends the run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Filename or line content does not follow the expected token layout.
    /// `line` is 1-based; 0 means the problem is in the filename itself.
    #[error("parse error in \"{}\" line {line}: {msg}", .path.display())]
    Parse { path: PathBuf, line: usize, msg: String },

    /// Algorithm tag or thread-count bucket outside the known set.
    #[error("unknown key \"{key}\" in \"{}\"", .path.display())]
    Key { path: PathBuf, key: String },

    #[error("io error on \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("plot error: {0}")]
    Plot(String),
}

impl BenchError {
    pub fn parse(path: impl Into<PathBuf>, line: usize, msg: impl Into<String>) -> Self {
        BenchError::Parse { path: path.into(), line, msg: msg.into() }
    }

    pub fn key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        BenchError::Key { path: path.into(), key: key.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BenchError::Io { path: path.into(), source }
    }
}
