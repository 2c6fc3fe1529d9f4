//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors raised while reading items.dat / interactions.dat or checking
/// the resulting index
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// interactions.dat (or an explicitly parsed items.dat) does not exist
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// The file exists but could not be read as UTF-8 text
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A record line is missing a field or has a non-integer id
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A parsed field is unusable, e.g. an interaction with a blank kind
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A record line has more `::`-separated fields than its format allows
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// An interaction names an item absent from a loaded catalog
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: i64 },

    /// Index-wide integrity failure, e.g. a duplicated interaction id
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, DataLoadError>;
