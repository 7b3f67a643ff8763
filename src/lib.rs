// src/lib.rs
//! Mobile-money fee optimizer
//!
//! Computes transfer fees under a tiered fee schedule and splits large
//! transfers into smaller ones whose fees add up to less:
//! - Fee Table
//! - Greedy Splitter
//! - Total fee Aggregator
//! - Savings Calculator
//!
//! The functions at the crate root use the standard MTN Mobile Money Rwanda
//! schedule. Use [`TransactionOptimizer`] for a custom schedule.

pub mod error_handling;
pub mod fee_optimization;
pub mod interfaces;

pub use error_handling::FeeError;
pub use fee_optimization::{
    Amount, FeeBracket, FeeSavings, FeeSchedule, OptimizationReport, TransactionFee,
    TransactionOptimizer, STANDARD_SCHEDULE,
};
pub use interfaces::{ComponentError, FeeOptimizationInterface};

/// Calculate the fee for a single transfer
///
/// ```
/// use momo_fee_optimizer::calculate_fee;
///
/// assert_eq!(calculate_fee(5_000), Ok(100));
/// assert_eq!(calculate_fee(100_000), Ok(250));
/// assert_eq!(calculate_fee(250_000), Ok(1_500));
/// assert!(calculate_fee(10_000_001).is_err());
/// ```
pub fn calculate_fee(amount: Amount) -> Result<TransactionFee, FeeError> {
    STANDARD_SCHEDULE.calculate_fee(amount)
}

/// Split a total into transfers that cost no more than one transfer
///
/// An empty plan means the total is outside the fee schedule.
///
/// ```
/// use momo_fee_optimizer::optimize_transactions;
///
/// assert_eq!(optimize_transactions(2_000), vec![1_000, 1_000]);
/// assert!(optimize_transactions(0).is_empty());
/// ```
pub fn optimize_transactions(total: Amount) -> Vec<Amount> {
    fee_optimization::optimize_transactions(&STANDARD_SCHEDULE, total)
}

/// Calculate the total fee of a plan of transfers
pub fn calculate_total_fee(transactions: &[Amount]) -> Result<TransactionFee, FeeError> {
    fee_optimization::calculate_total_fee(&STANDARD_SCHEDULE, transactions)
}

/// Calculate how much splitting a total saves over a single transfer
pub fn calculate_fees_savings(total: Amount) -> Result<FeeSavings, FeeError> {
    fee_optimization::calculate_fees_savings(&STANDARD_SCHEDULE, total)
}
