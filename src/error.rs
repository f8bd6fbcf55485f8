//! Error types for semivariogram computations

use thiserror::Error;

/// Main error type for variogram evaluation, estimation and fitting
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Division undefined while computing {quantity}: sill is zero")]
    DivisionUndefined { quantity: &'static str },

    #[error("Insufficient data for {what}: need at least {needed}, found {found}")]
    InsufficientData {
        what: &'static str,
        needed: usize,
        found: usize,
    },

    #[error("Fit error: {0}")]
    Fit(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Could not parse value {value:?} in column {column}")]
    ParseValue { column: String, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &str) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for semivariogram operations
pub type Result<T> = std::result::Result<T, Error>;
