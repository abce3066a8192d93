use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the backup analyzer.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The backup file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report file or the output directory could not be written.
    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backup document is not valid JSON of the expected shape.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A CSV record could not be serialized or flushed.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The plotting backend reported a drawing failure.
    #[error("Chart rendering error: {0}")]
    Chart(String),
}

/// Convenience alias used throughout the analyzer crates.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
