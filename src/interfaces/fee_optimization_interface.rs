// src/interfaces/fee_optimization_interface.rs
//! Fee Optimization Interface
//!
//! This module defines the interface for interacting with the fee optimization system.
//! It provides a clean abstraction layer over the fee schedule and splitter.

use crate::error_handling::FeeError;
use crate::fee_optimization::{
    Amount, FeeSavings, OptimizationReport, TransactionFee, TransactionOptimizer,
};

/// Interface for interacting with the fee optimization system
pub trait FeeOptimizationInterface {
    /// Fee for a single transfer
    fn calculate_fee(&self, amount: Amount) -> Result<TransactionFee, FeeError>;

    /// Split a total into transfers; an empty plan means the total is invalid
    fn optimize_transactions(&self, total: Amount) -> Vec<Amount>;

    /// Total fee for a plan of transfers
    fn calculate_total_fee(&self, transactions: &[Amount]) -> Result<TransactionFee, FeeError>;

    /// Savings of the optimized plan over a single transfer
    fn calculate_fees_savings(&self, total: Amount) -> Result<FeeSavings, FeeError>;

    /// Timed optimization run
    fn benchmark_optimization(&self, amount: Amount) -> Result<OptimizationReport, FeeError>;
}

impl FeeOptimizationInterface for TransactionOptimizer {
    fn calculate_fee(&self, amount: Amount) -> Result<TransactionFee, FeeError> {
        TransactionOptimizer::calculate_fee(self, amount)
    }

    fn optimize_transactions(&self, total: Amount) -> Vec<Amount> {
        TransactionOptimizer::optimize_transactions(self, total)
    }

    fn calculate_total_fee(&self, transactions: &[Amount]) -> Result<TransactionFee, FeeError> {
        TransactionOptimizer::calculate_total_fee(self, transactions)
    }

    fn calculate_fees_savings(&self, total: Amount) -> Result<FeeSavings, FeeError> {
        TransactionOptimizer::calculate_fees_savings(self, total)
    }

    fn benchmark_optimization(&self, amount: Amount) -> Result<OptimizationReport, FeeError> {
        TransactionOptimizer::benchmark_optimization(self, amount)
    }
}
