// src/fee_optimization/mod.rs
//! Fee Optimization module
//!
//! This module contains the tiered fee table, the greedy splitter that breaks
//! a transfer into cheaper pieces, and the calculators built on top of them.

pub mod aggregator;
pub mod fee_table;
pub mod savings;
pub mod splitter;
pub mod transaction_optimizer;

/// Monetary amount in the smallest unit of the fee schedule
pub type Amount = i64;

/// Fee charged for a transfer
pub type TransactionFee = u64;

// Re-export main components
pub use aggregator::calculate_total_fee;
pub use fee_table::{FeeBracket, FeeSchedule, MAX_FEE, STANDARD_BRACKETS, STANDARD_SCHEDULE};
pub use savings::{benchmark_optimization, calculate_fees_savings, FeeSavings, OptimizationReport};
pub use splitter::{greedy_split, optimize_transactions, MAX_PLAN_TRANSACTIONS};
pub use transaction_optimizer::TransactionOptimizer;
