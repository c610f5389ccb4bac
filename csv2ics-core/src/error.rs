//! Error types for csv2ics.

use thiserror::Error;

/// Errors that can occur while converting a CSV file.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Error parsing date '{input}'. Fix the data and run it again: {reason}")]
    DateParse { input: String, reason: String },

    #[error("Line {line}: expected 3 fields (date, name, description), found {found}")]
    Structure { line: u64, found: usize },

    #[error("Input has no header row")]
    MissingHeader,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for csv2ics operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
