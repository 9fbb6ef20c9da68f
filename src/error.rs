//! Stable error codes for API clients.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Db(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("No order specified for key column '{0}'")]
    MissingOrderKey(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Invalid direction '{0}': expected one of previous, current or next")]
    InvalidDirection(String),

    #[error("This is the last page, no next page")]
    NoNextPage,

    #[error("This is the first page, no previous page")]
    NoPreviousPage,

    #[error("Count query failed: {0}")]
    CountQueryFailed(#[source] rusqlite::Error),

    #[error("Range query failed: {0}")]
    RangeQueryFailed(#[source] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "DB_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::MissingOrderKey(_) => "MISSING_ORDER_KEY",
            Self::UnknownColumn(_) => "UNKNOWN_COLUMN",
            Self::InvalidDirection(_) => "INVALID_DIRECTION",
            Self::NoNextPage => "NO_NEXT_PAGE",
            Self::NoPreviousPage => "NO_PREVIOUS_PAGE",
            Self::CountQueryFailed(_) => "COUNT_QUERY_FAILED",
            Self::RangeQueryFailed(_) => "RANGE_QUERY_FAILED",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Page exhaustion is an expected outcome of browsing, not a failure.
    pub fn is_page_boundary(&self) -> bool {
        matches!(self, Self::NoNextPage | Self::NoPreviousPage)
    }

    pub fn to_serde(&self) -> AppErrorDto {
        AppErrorDto {
            code: self.code().to_string(),
            message: self.to_string(),
            details: None,
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e.to_string())
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_serde().serialize(serializer)
    }
}

#[derive(Debug, Serialize)]
pub struct AppErrorDto {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
