use thiserror::Error;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to open file {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid ngram size: {0}")]
    InvalidNgramSize(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

// Type alias for Result
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn decoding<S: Into<String>>(msg: S) -> Self {
        Error::Decoding(msg.into())
    }

    pub fn empty_input<S: Into<String>>(msg: S) -> Self {
        Error::EmptyInput(msg.into())
    }

    pub fn file_access<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::FileAccess { path: path.into(), source }
    }

    /// True for the failures that originate in the comparison core rather
    /// than in file handling or configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Decoding(_) | Error::EmptyInput(_))
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(format!("Thread pool build failed: {}", err))
    }
}
