//! Error types for the analysis pipeline
//!
//! Each message starts with the stage that failed (`load`, `summarize`,
//! `render`) and names the path or column involved.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for every analysis stage
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("load: input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Malformed or ragged rows in the input file
    #[error("load: cannot parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// A required column is absent from the header
    #[error("load: required column '{column}' is missing")]
    MissingColumn { column: String },

    /// A column expected to be numeric holds text
    #[error("load: column '{column}' is not numeric (dtype {dtype})")]
    NonNumericColumn { column: String, dtype: String },

    /// A column has no values to summarize
    #[error("summarize: column '{}' has no values", .column.as_deref().unwrap_or("<unnamed>"))]
    EmptyColumn { column: Option<String> },

    /// The chart could not be drawn or written
    #[error("render: cannot write chart to {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },

    /// Invalid parameter provided to a function
    #[error("summarize: invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("summarize: invalid input: {0}")]
    InvalidInput(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an empty, not yet named, column
    pub fn empty_input() -> Self {
        Self::EmptyColumn { column: None }
    }

    /// Create an error for an invalid quantile probability
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Attach a column name to errors raised before the name was known
    pub fn with_column(self, name: &str) -> Self {
        match self {
            Self::EmptyColumn { column: None } => Self::EmptyColumn {
                column: Some(name.to_string()),
            },
            Self::InvalidInput(msg) => Self::InvalidInput(format!("column '{name}': {msg}")),
            other => other,
        }
    }
}
