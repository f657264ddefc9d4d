//! Error types for the statement converter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for converter operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur during conversion.
///
/// Per-line recognition failures are never represented here: a line that
/// fails the grammar or normalization is skipped and counted, and parsing
/// continues. These variants are the fatal conditions that terminate the
/// run with no output artifact.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Failed to read the input file or write the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: statement2ofx <statement.txt>")]
    MissingArgument,

    /// Input path does not exist or is not a regular file
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input file does not carry the expected extension
    #[error("Input file does not have a .txt extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),

    /// Page count exceeds the configured ceiling
    #[error("Input exceeds the limit of {limit} pages ({found} found)")]
    TooManyPages { found: usize, limit: usize },

    /// No line in the whole input matched the statement grammar
    #[error("No transactions recognized in the input. Check that the statement layout is supported.")]
    NoTransactions,
}
