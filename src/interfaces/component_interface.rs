// src/interfaces/component_interface.rs
//! Standard interfaces for fee optimizer components

use std::error::Error;
use std::fmt::{Debug, Display};

/// Standard error interface for all components
pub trait ComponentError: Error + Debug + Display {
    /// Get the error code
    fn error_code(&self) -> u32;

    /// Get the error message
    fn error_message(&self) -> String {
        self.to_string()
    }
}
