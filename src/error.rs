//! Error types for the sales-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while preparing or running a forecast.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// A date string failed to parse as a `YYYY-MM-DD` calendar date.
    #[error("invalid date range: {0}")]
    InvalidDateRange(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The data-access collaborator failed.
    #[error("data access error: {0}")]
    DataAccess(String),
}
