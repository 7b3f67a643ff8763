// src/fee_optimization/fee_table.rs
//! Fee table for mobile-money transfers
//!
//! A fee schedule is an ordered list of closed amount brackets, each charging
//! one flat fee. The standard schedule is the MTN Mobile Money Rwanda tariff:
//!
//! | Range                   | Fee   |
//! |-------------------------|-------|
//! | 1 - 1,000               | 20    |
//! | 1,001 - 10,000          | 100   |
//! | 10,001 - 150,000        | 250   |
//! | 150,001 - 2,000,000     | 1,500 |
//! | 2,000,001 - 5,000,000   | 3,000 |
//! | 5,000,001 - 10,000,000  | 5,000 |
//!
//! Amounts outside the covered range have no fee.

use std::borrow::Cow;
use std::cmp::Ordering;

use log::warn;
use serde::{Deserialize, Serialize};

use super::{Amount, TransactionFee};
use crate::error_handling::FeeError;

/// A closed amount range charging a single flat fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBracket {
    /// Lowest amount in the bracket (inclusive)
    pub low: Amount,

    /// Highest amount in the bracket (inclusive)
    pub high: Amount,

    /// Fee charged for any amount in the bracket
    pub fee: TransactionFee,
}

impl FeeBracket {
    /// Create a new bracket
    pub const fn new(low: Amount, high: Amount, fee: TransactionFee) -> Self {
        Self { low, high, fee }
    }

    /// Check whether an amount falls inside the bracket
    pub fn contains(&self, amount: Amount) -> bool {
        self.low <= amount && amount <= self.high
    }
}

/// Brackets of the MTN Mobile Money Rwanda tariff
pub const STANDARD_BRACKETS: [FeeBracket; 6] = [
    FeeBracket::new(1, 1_000, 20),
    FeeBracket::new(1_001, 10_000, 100),
    FeeBracket::new(10_001, 150_000, 250),
    FeeBracket::new(150_001, 2_000_000, 1_500),
    FeeBracket::new(2_000_001, 5_000_000, 3_000),
    FeeBracket::new(5_000_001, 10_000_000, 5_000),
];

/// Largest fee a bracket may charge, so that savings fit in an `i64`
pub const MAX_FEE: TransactionFee = i64::MAX as TransactionFee;

/// The standard fee schedule, shared by the crate-level functions
pub static STANDARD_SCHEDULE: FeeSchedule = FeeSchedule::standard();

/// Schedule as it appears in a JSON configuration file
#[derive(Debug, Deserialize)]
struct FeeScheduleConfig {
    brackets: Vec<FeeBracket>,
}

/// Ordered, contiguous list of fee brackets
///
/// Every `FeeSchedule` reachable through the public API has passed
/// [`FeeSchedule::validate`], so lookups can rely on the brackets being
/// non-empty, ascending and gap-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeSchedule {
    /// Brackets in ascending amount order
    brackets: Cow<'static, [FeeBracket]>,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl FeeSchedule {
    /// The standard MTN Mobile Money Rwanda schedule
    pub const fn standard() -> Self {
        Self {
            brackets: Cow::Borrowed(&STANDARD_BRACKETS),
        }
    }

    /// Create a custom schedule, validating the brackets
    pub fn new(brackets: Vec<FeeBracket>) -> Result<Self, FeeError> {
        let schedule = Self {
            brackets: Cow::Owned(brackets),
        };

        schedule.validate().map_err(|e| {
            warn!("Rejected fee schedule: {}", e);
            e
        })?;

        Ok(schedule)
    }

    /// Load a custom schedule from JSON of the form
    /// `{"brackets": [{"low": 1, "high": 1000, "fee": 20}, ...]}`
    pub fn from_json(json: &str) -> Result<Self, FeeError> {
        let config: FeeScheduleConfig = serde_json::from_str(json)?;
        Self::new(config.brackets)
    }

    /// Validate the schedule
    pub fn validate(&self) -> Result<(), FeeError> {
        let first = self
            .brackets
            .first()
            .ok_or_else(|| FeeError::InvalidSchedule("Schedule has no brackets".to_string()))?;

        if first.low < 1 {
            return Err(FeeError::InvalidSchedule(format!(
                "First bracket must start at a positive amount, got {}",
                first.low
            )));
        }

        for bracket in self.brackets.iter() {
            if bracket.low > bracket.high {
                return Err(FeeError::InvalidSchedule(format!(
                    "Bracket low ({}) greater than high ({})",
                    bracket.low, bracket.high
                )));
            }

            if bracket.fee > MAX_FEE {
                return Err(FeeError::InvalidSchedule(format!(
                    "Bracket {}-{} fee ({}) exceeds the maximum fee ({})",
                    bracket.low, bracket.high, bracket.fee, MAX_FEE
                )));
            }
        }

        for pair in self.brackets.windows(2) {
            let expected_low = pair[0].high.checked_add(1).ok_or_else(|| {
                FeeError::InvalidSchedule(format!(
                    "Bracket ending at {} cannot be followed by another bracket",
                    pair[0].high
                ))
            })?;

            if pair[1].low != expected_low {
                return Err(FeeError::InvalidSchedule(format!(
                    "Brackets must be contiguous: bracket ending at {} followed by bracket starting at {}",
                    pair[0].high, pair[1].low
                )));
            }
        }

        Ok(())
    }

    /// Brackets in ascending order
    pub fn brackets(&self) -> &[FeeBracket] {
        &self.brackets
    }

    /// Lowest amount the schedule accepts
    pub fn min_amount(&self) -> Amount {
        self.brackets.first().map_or(1, |b| b.low)
    }

    /// Highest amount the schedule accepts
    pub fn max_amount(&self) -> Amount {
        self.brackets.last().map_or(0, |b| b.high)
    }

    /// Check whether an amount is inside the schedule's range
    pub fn is_valid_amount(&self, amount: Amount) -> bool {
        self.min_amount() <= amount && amount <= self.max_amount()
    }

    /// Find the bracket an amount falls into
    pub fn bracket_for(&self, amount: Amount) -> Option<&FeeBracket> {
        self.brackets
            .binary_search_by(|bracket| {
                if amount < bracket.low {
                    Ordering::Greater
                } else if amount > bracket.high {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            })
            .ok()
            .map(|index| &self.brackets[index])
    }

    /// Calculate the fee for a single transfer
    pub fn calculate_fee(&self, amount: Amount) -> Result<TransactionFee, FeeError> {
        self.bracket_for(amount)
            .map(|bracket| bracket.fee)
            .ok_or_else(|| FeeError::AmountOutOfRange {
                amount,
                min: self.min_amount(),
                max: self.max_amount(),
            })
    }

    /// Bracket upper bounds, used as split candidates
    pub fn split_points(&self) -> impl DoubleEndedIterator<Item = Amount> + '_ {
        self.brackets.iter().map(|bracket| bracket.high)
    }
}
