// src/fee_optimization/splitter.rs
//! Greedy transfer splitting
//!
//! A total is cut into chunks, each as large as the biggest bracket upper
//! bound that still fits in what is left. Chunks sitting exactly on a bound
//! pay the cheapest fee per unit their bracket allows. This is a heuristic and
//! can lose to a single transfer (9,999,999 greedily becomes 28 transfers), so
//! the plan is only kept when it costs no more than sending the total at once.
//!
//! Chunks are priced while the plan is built. Splitting stops as soon as the
//! running fee passes the single-transfer fee or the plan would grow past
//! [`MAX_PLAN_TRANSACTIONS`], which keeps custom schedules with tiny bounds
//! from producing enormous plans.

use std::iter;

use log::{debug, trace};

use super::fee_table::FeeSchedule;
use super::{Amount, TransactionFee};

/// Longest plan the splitter will build
///
/// The standard schedule never needs more than a few dozen transfers.
pub const MAX_PLAN_TRANSACTIONS: usize = 10_000;

/// Split a total into a plan of transfers whose fees add up to no more than
/// the fee of the total itself
///
/// Returns an empty plan when the total is outside the schedule's range.
pub fn optimize_transactions(schedule: &FeeSchedule, total: Amount) -> Vec<Amount> {
    let single_fee = match schedule.calculate_fee(total) {
        Ok(fee) => fee,
        Err(_) => {
            debug!("Total {} is outside the fee schedule, nothing to optimize", total);
            return Vec::new();
        }
    };

    match split_within(schedule, total, Some(single_fee)) {
        Some((plan, split_fee)) => {
            debug!(
                "Split {} into {} transfers, fee {} instead of {}",
                total,
                plan.len(),
                split_fee,
                single_fee
            );
            plan
        }
        None => {
            debug!(
                "Greedy plan for {} not kept, sending it as a single transfer (fee {})",
                total, single_fee
            );
            vec![total]
        }
    }
}

/// Raw greedy split, without comparing against a single transfer
///
/// Each step takes the largest bracket upper bound not exceeding the
/// remainder, or the whole remainder when it is below every bound. The
/// chunks always sum to `total`. A non-positive total yields an empty plan.
/// Returns `None` when the plan would be longer than
/// [`MAX_PLAN_TRANSACTIONS`].
pub fn greedy_split(schedule: &FeeSchedule, total: Amount) -> Option<Vec<Amount>> {
    split_within(schedule, total, None).map(|(plan, _)| plan)
}

/// Greedy split that gives up once the plan is too long or, when a fee limit
/// is set, once its running fee exceeds the limit or a chunk has no fee
///
/// The fee is only tracked when a limit is set.
fn split_within(
    schedule: &FeeSchedule,
    total: Amount,
    fee_limit: Option<TransactionFee>,
) -> Option<(Vec<Amount>, TransactionFee)> {
    let mut plan = Vec::new();
    let mut fee: TransactionFee = 0;
    let mut remaining = total;

    while remaining > 0 {
        // Repeated chunks of one bound are taken in a single step
        let bound = schedule
            .split_points()
            .rev()
            .find(|&point| point <= remaining);
        let (chunk, count) = match bound {
            Some(point) => (point, remaining / point),
            None => (remaining, 1),
        };

        let repeat = usize::try_from(count).ok()?;
        if plan.len().checked_add(repeat)? > MAX_PLAN_TRANSACTIONS {
            trace!(
                "Plan for {} would exceed {} transfers",
                total,
                MAX_PLAN_TRANSACTIONS
            );
            return None;
        }

        if let Some(limit) = fee_limit {
            let chunk_fee = schedule.calculate_fee(chunk).ok()?;
            fee = chunk_fee
                .checked_mul(u64::try_from(count).ok()?)
                .and_then(|chunks_fee| fee.checked_add(chunks_fee))?;
            if fee > limit {
                trace!("Plan for {} passed fee limit {} at {}", total, limit, fee);
                return None;
            }
        }

        remaining -= chunk * count;
        trace!("Greedy chunk {} x{} (remaining {})", chunk, count, remaining);

        plan.extend(iter::repeat(chunk).take(repeat));
    }

    Some((plan, fee))
}
