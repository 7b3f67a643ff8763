// src/interfaces/mod.rs
//! Interfaces module
//!
//! This module provides the interfaces callers use to reach the fee
//! optimization system, and the error interface its components share.

mod component_interface;
mod fee_optimization_interface;

pub use component_interface::*;
pub use fee_optimization_interface::*;
