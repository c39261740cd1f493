//! Set-level budget validation.
//!
//! A budget set is accepted only if no two records share a name and, for every
//! source address, the rates of all budgets active at the same instant never
//! sum above [`MAX_TOTAL_RATE`].

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::budgets_model::Budget;
use super::budgets_query::budgets_by_source;
use crate::constants::MAX_TOTAL_RATE;
use crate::errors::{BudgetError, Result};

/// Validates a whole budget set.
///
/// Duplicate names are reported before any rate violation. Sources are
/// checked in ascending address order, so the reported source is stable.
pub fn validate_budgets(budgets: &[Budget]) -> Result<()> {
    let mut names: HashSet<&str> = HashSet::with_capacity(budgets.len());
    for budget in budgets {
        if !names.insert(budget.name.as_str()) {
            return Err(BudgetError::DuplicateBudgetName(budget.name.clone()).into());
        }
    }

    for (source, group) in budgets_by_source(budgets) {
        let within_bound = peak_rate(&group).is_some_and(|peak| peak <= MAX_TOTAL_RATE);
        if !within_bound {
            return Err(BudgetError::InvalidTotalBudgetRate(source.to_string()).into());
        }
    }

    Ok(())
}

/// Highest aggregate rate drawn from `source` at any single instant.
///
/// Returns `Some(0)` when the source has no budgets with a non-empty window,
/// and `None` when the running sum leaves the `Decimal` range.
pub fn peak_total_rate(budgets: &[Budget], source: &str) -> Option<Decimal> {
    let group: Vec<&Budget> = budgets
        .iter()
        .filter(|budget| budget.source_address == source)
        .collect();
    peak_rate(&group)
}

/// Sweep over window boundaries keeping a running rate sum.
///
/// At equal timestamps end events sort before start events: a window ending
/// at `t` and one starting at `t` are never active together. An overflowing
/// sum yields `None`, which callers treat as over the bound.
fn peak_rate(group: &[&Budget]) -> Option<Decimal> {
    let mut events: Vec<(DateTime<Utc>, bool, Decimal)> = Vec::with_capacity(group.len() * 2);
    for budget in group.iter().filter(|b| b.has_valid_window()) {
        events.push((budget.start_time, true, budget.rate));
        events.push((budget.end_time, false, budget.rate));
    }
    // `false < true`, so ends come first within a timestamp.
    events.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    let mut running = Decimal::ZERO;
    let mut peak = Decimal::ZERO;
    for (_, is_start, rate) in events {
        if is_start {
            running = running.checked_add(rate)?;
            peak = peak.max(running);
        } else {
            running = running.checked_sub(rate)?;
        }
    }
    Some(peak)
}
