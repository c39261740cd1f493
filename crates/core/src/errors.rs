//! Core error types for the budget engine.
//!
//! This module defines storage-agnostic error types. Errors raised by a
//! parameter store are converted to [`DatabaseError`] by the storage layer.

use chrono::{DateTime, ParseError as ChronoParseError, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the budget engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Budget and parameter rejections. Displayed verbatim so callers sitting
    /// behind a configuration-update interface see the exact message.
    #[error(transparent)]
    Budget(#[from] BudgetError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Returns the budget rejection carried by this error, if any.
    pub fn as_budget_error(&self) -> Option<&BudgetError> {
        match self {
            Error::Budget(err) => Some(err),
            _ => None,
        }
    }
}

/// Rejections raised while validating budgets and parameter values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BudgetError {
    #[error("duplicate budget name: {0}")]
    DuplicateBudgetName(String),

    #[error("invalid total rate of the budgets with the same source address: {0}")]
    InvalidTotalBudgetRate(String),

    #[error("invalid parameter type: {0}")]
    InvalidParameterType(String),

    #[error("invalid budget name: {0}")]
    InvalidBudgetName(String),

    #[error("invalid budget rate for {name}: {rate}")]
    InvalidBudgetRate { name: String, rate: Decimal },

    #[error("invalid time range for {name}: start {start} is not before end {end}")]
    InvalidTimeRange {
        name: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("invalid source address for budget {0}")]
    InvalidSourceAddress(String),

    #[error("invalid destination address for budget {0}")]
    InvalidDestinationAddress(String),

    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
}

/// Storage-agnostic error type for parameter store operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// A read from the store failed.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A write to the store failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
