// src/fee_optimization/savings.rs
//! Fee savings from splitting a transfer
//!
//! Compares the fee of sending a total in one transfer with the fee of the
//! optimized plan, and produces timed reports of optimization runs.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

use super::aggregator::calculate_total_fee;
use super::fee_table::FeeSchedule;
use super::splitter::optimize_transactions;
use super::{Amount, TransactionFee};
use crate::error_handling::FeeError;

/// Fees of the unsplit and split strategies for one total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeSavings {
    /// `original_fee - optimized_fee`
    pub savings: i64,

    /// Fee of the total sent as a single transfer
    pub original_fee: TransactionFee,

    /// Sum of the fees of the optimized plan
    pub optimized_fee: TransactionFee,
}

/// Calculate how much splitting a total saves
pub fn calculate_fees_savings(
    schedule: &FeeSchedule,
    total: Amount,
) -> Result<FeeSavings, FeeError> {
    let original_fee = schedule.calculate_fee(total)?;

    let plan = optimize_transactions(schedule, total);
    let optimized_fee = calculate_total_fee(schedule, &plan)?;

    Ok(FeeSavings {
        savings: fee_difference(original_fee, optimized_fee)?,
        original_fee,
        optimized_fee,
    })
}

/// Signed difference of two fees
fn fee_difference(
    original_fee: TransactionFee,
    optimized_fee: TransactionFee,
) -> Result<i64, FeeError> {
    i64::try_from(original_fee)
        .ok()
        .zip(i64::try_from(optimized_fee).ok())
        .and_then(|(original, optimized)| original.checked_sub(optimized))
        .ok_or_else(|| {
            FeeError::Arithmetic(format!(
                "Savings of {} over {} do not fit in an i64",
                original_fee, optimized_fee
            ))
        })
}

/// Outcome of one timed optimization run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    /// Total that was optimized
    pub amount: Amount,

    /// Plan produced by the splitter
    pub optimized_transactions: Vec<Amount>,

    /// Fee of the total as a single transfer
    pub default_fee: TransactionFee,

    /// Total fee of the plan
    pub total_fee: TransactionFee,

    /// Fee of each transfer in the plan, in plan order
    pub transaction_fees: Vec<TransactionFee>,

    /// Time spent in the splitter
    pub execution_time: Duration,
}

impl OptimizationReport {
    /// Sum of the planned transfers
    pub fn transactions_sum(&self) -> Amount {
        self.optimized_transactions.iter().sum()
    }

    /// Execution time in milliseconds
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for OptimizationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Amount: {}", self.amount)?;
        writeln!(f, "Optimized transactions: {:?}", self.optimized_transactions)?;
        writeln!(
            f,
            "Default fee: {}, Optimized fee: {}",
            self.default_fee, self.total_fee
        )?;
        writeln!(f, "Transactions sum: {}", self.transactions_sum())?;
        writeln!(f, "Execution time: {:.4} ms", self.execution_time_ms())?;
        for (amount, fee) in self
            .optimized_transactions
            .iter()
            .zip(&self.transaction_fees)
        {
            writeln!(f, "  - Transaction {}: Fee = {}", amount, fee)?;
        }
        Ok(())
    }
}

/// Time the splitter on a total and collect the resulting fees
pub fn benchmark_optimization(
    schedule: &FeeSchedule,
    amount: Amount,
) -> Result<OptimizationReport, FeeError> {
    let start = Instant::now();
    let optimized_transactions = optimize_transactions(schedule, amount);
    let execution_time = start.elapsed();

    let default_fee = schedule.calculate_fee(amount)?;
    let transaction_fees = optimized_transactions
        .iter()
        .map(|&transaction| schedule.calculate_fee(transaction))
        .collect::<Result<Vec<_>, _>>()?;
    let total_fee = calculate_total_fee(schedule, &optimized_transactions)?;

    Ok(OptimizationReport {
        amount,
        optimized_transactions,
        default_fee,
        total_fee,
        transaction_fees,
        execution_time,
    })
}
