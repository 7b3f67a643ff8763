// src/fee_optimization/aggregator.rs
//! Total fee of a transaction plan

use super::fee_table::FeeSchedule;
use super::{Amount, TransactionFee};
use crate::error_handling::FeeError;

/// Calculate the total fee for a sequence of transfers
///
/// Stops at the first transfer without a fee and reports it. An empty
/// sequence costs nothing. A total that does not fit in a fee is an
/// arithmetic error.
pub fn calculate_total_fee(
    schedule: &FeeSchedule,
    transactions: &[Amount],
) -> Result<TransactionFee, FeeError> {
    transactions
        .iter()
        .enumerate()
        .try_fold(0, |total: TransactionFee, (index, &amount)| {
            let fee = schedule
                .calculate_fee(amount)
                .map_err(|_| FeeError::InvalidTransaction { index, amount })?;
            total.checked_add(fee).ok_or_else(|| {
                FeeError::Arithmetic(format!(
                    "Total fee overflows after transaction {} (amount {})",
                    index, amount
                ))
            })
        })
}
