// src/fee_optimization/transaction_optimizer.rs
//! Transaction optimizer bound to one fee schedule

use super::fee_table::FeeSchedule;
use super::savings::{FeeSavings, OptimizationReport};
use super::{aggregator, savings, splitter, Amount, TransactionFee};
use crate::error_handling::FeeError;

/// Fee calculation and transfer splitting under a single fee schedule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionOptimizer {
    /// Schedule every operation is priced with
    schedule: FeeSchedule,
}

impl TransactionOptimizer {
    /// Create an optimizer using the standard schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an optimizer using a custom schedule
    pub fn with_schedule(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    /// Create an optimizer from a JSON fee schedule
    pub fn from_json(json: &str) -> Result<Self, FeeError> {
        Ok(Self::with_schedule(FeeSchedule::from_json(json)?))
    }

    /// Schedule in use
    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Fee for a single transfer
    pub fn calculate_fee(&self, amount: Amount) -> Result<TransactionFee, FeeError> {
        self.schedule.calculate_fee(amount)
    }

    /// Plan of transfers for a total; empty when the total is out of range
    pub fn optimize_transactions(&self, total: Amount) -> Vec<Amount> {
        splitter::optimize_transactions(&self.schedule, total)
    }

    /// Total fee of a plan
    pub fn calculate_total_fee(&self, transactions: &[Amount]) -> Result<TransactionFee, FeeError> {
        aggregator::calculate_total_fee(&self.schedule, transactions)
    }

    /// Savings of the optimized plan over a single transfer
    pub fn calculate_fees_savings(&self, total: Amount) -> Result<FeeSavings, FeeError> {
        savings::calculate_fees_savings(&self.schedule, total)
    }

    /// Timed optimization run
    pub fn benchmark_optimization(&self, amount: Amount) -> Result<OptimizationReport, FeeError> {
        savings::benchmark_optimization(&self.schedule, amount)
    }
}

impl From<FeeSchedule> for TransactionOptimizer {
    fn from(schedule: FeeSchedule) -> Self {
        Self::with_schedule(schedule)
    }
}
