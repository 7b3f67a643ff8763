// src/error_handling/mod.rs
//! Error handling for the fee optimizer
//!
//! This module provides the error type shared by the fee table, the
//! aggregator, the savings calculator and schedule configuration.

pub mod error_types;

// Re-export common types
pub use error_types::FeeError;
