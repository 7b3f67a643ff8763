// src/error_handling/error_types.rs
//! Error types for the fee optimizer
//!
//! Every operation that can meet an amount outside the fee schedule returns
//! one of these errors as a value instead of panicking.

use thiserror::Error;

use crate::fee_optimization::Amount;
use crate::interfaces::ComponentError;

/// Base error type for fee calculation and optimization
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    /// Amount outside the range covered by the fee schedule
    #[error("Amount out of range: {amount} is not within [{min}, {max}]")]
    AmountOutOfRange {
        /// Offending amount
        amount: Amount,
        /// Lowest amount the schedule accepts
        min: Amount,
        /// Highest amount the schedule accepts
        max: Amount,
    },

    /// A transaction inside a plan has no fee
    #[error("Invalid transaction at index {index}: amount {amount}")]
    InvalidTransaction {
        /// Position of the transaction in the plan
        index: usize,
        /// Amount of the transaction
        amount: Amount,
    },

    /// Fee schedule failed validation
    #[error("Invalid fee schedule: {0}")]
    InvalidSchedule(String),

    /// Fee arithmetic left the representable range
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Fee schedule could not be parsed
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FeeError {
    /// Convert to error code
    pub fn to_error_code(&self) -> u32 {
        match self {
            FeeError::AmountOutOfRange { .. } => 1000,
            FeeError::InvalidTransaction { .. } => 1001,
            FeeError::InvalidSchedule(_) => 1002,
            FeeError::Configuration(_) => 1003,
            FeeError::Arithmetic(_) => 1004,
        }
    }

    /// Whether this error is the "invalid amount" marker rather than a
    /// configuration problem
    pub fn is_invalid_amount(&self) -> bool {
        matches!(
            self,
            FeeError::AmountOutOfRange { .. } | FeeError::InvalidTransaction { .. }
        )
    }
}

impl ComponentError for FeeError {
    fn error_code(&self) -> u32 {
        self.to_error_code()
    }
}

impl From<serde_json::Error> for FeeError {
    fn from(error: serde_json::Error) -> Self {
        FeeError::Configuration(error.to_string())
    }
}
