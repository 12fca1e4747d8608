//! Error types for lifestyle-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error(transparent)]
    Core(#[from] lifestyle_core::Error),
}

impl Error {
    /// The analysis-level error kind, if this is not a raw Polars failure
    pub fn core(&self) -> Option<&lifestyle_core::Error> {
        match self {
            Self::Core(err) => Some(err),
            Self::Polars(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
