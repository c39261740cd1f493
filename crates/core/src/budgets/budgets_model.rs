//! Budget domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_BUDGET_NAME_LENGTH, MAX_TOTAL_RATE};
use crate::errors::{BudgetError, Result};
use crate::utils::parse_rfc3339;

/// A scheduled disbursement commitment.
///
/// While active, a budget transfers `rate` of the source's disbursable pool to
/// the destination once per epoch. The active window is half-open:
/// `[start_time, end_time)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Budget {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    pub source_address: String,
    pub destination_address: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Budget {
    /// Returns true if the budget's window contains `at`.
    pub fn is_collectible_at(&self, at: DateTime<Utc>) -> bool {
        self.start_time <= at && at < self.end_time
    }

    /// Returns true if both windows share at least one instant.
    pub fn overlaps(&self, other: &Budget) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }

    /// Returns true if the window is non-empty.
    pub fn has_valid_window(&self) -> bool {
        self.start_time < self.end_time
    }

    /// Validates a single budget record.
    ///
    /// Checks run in order: name, source address, destination address,
    /// time window, rate. The set-level checks (duplicate names, aggregate
    /// rate) live in [`super::validate_budgets`].
    pub fn validate(&self) -> Result<()> {
        if !is_valid_budget_name(&self.name) {
            return Err(BudgetError::InvalidBudgetName(self.name.clone()).into());
        }
        if self.source_address.trim().is_empty() {
            return Err(BudgetError::InvalidSourceAddress(self.name.clone()).into());
        }
        if self.destination_address.trim().is_empty() {
            return Err(BudgetError::InvalidDestinationAddress(self.name.clone()).into());
        }
        if !self.has_valid_window() {
            return Err(BudgetError::InvalidTimeRange {
                name: self.name.clone(),
                start: self.start_time,
                end: self.end_time,
            }
            .into());
        }
        if self.rate <= Decimal::ZERO || self.rate > MAX_TOTAL_RATE {
            return Err(BudgetError::InvalidBudgetRate {
                name: self.name.clone(),
                rate: self.rate,
            }
            .into());
        }
        Ok(())
    }
}

/// Name rule: 1 to 50 ASCII alphanumerics, `-` or `_`.
fn is_valid_budget_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().count() <= MAX_BUDGET_NAME_LENGTH
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Input model for proposing a new budget.
///
/// Rate and timestamps are kept as text, as they arrive in a proposal
/// payload, and parsed by [`NewBudget::into_budget`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewBudget {
    pub name: String,
    pub rate: String,
    pub source_address: String,
    pub destination_address: String,
    pub start_time: String,
    pub end_time: String,
}

impl NewBudget {
    /// Parses the textual fields and validates the resulting record.
    pub fn into_budget(self) -> Result<Budget> {
        let rate = self.rate.trim().parse::<Decimal>()?;
        let start_time = parse_rfc3339(&self.start_time)?;
        let end_time = parse_rfc3339(&self.end_time)?;

        let budget = Budget {
            name: self.name,
            rate,
            source_address: self.source_address,
            destination_address: self.destination_address,
            start_time,
            end_time,
        };
        budget.validate()?;
        Ok(budget)
    }
}
