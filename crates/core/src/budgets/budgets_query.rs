//! Read-only queries over a budget set.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::budgets_model::Budget;

/// Returns the budgets whose window contains `at`, in input order.
///
/// Called once per epoch with the current block time; the result is the set
/// the disbursement step acts upon.
pub fn collectible_budgets(budgets: &[Budget], at: DateTime<Utc>) -> Vec<Budget> {
    budgets
        .iter()
        .filter(|budget| budget.is_collectible_at(at))
        .cloned()
        .collect()
}

/// Optional exact-match criteria for listing budgets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetFilter {
    pub name: Option<String>,
    pub source_address: Option<String>,
    pub destination_address: Option<String>,
}

impl BudgetFilter {
    pub fn matches(&self, budget: &Budget) -> bool {
        self.name.as_deref().map_or(true, |n| n == budget.name)
            && self
                .source_address
                .as_deref()
                .map_or(true, |s| s == budget.source_address)
            && self
                .destination_address
                .as_deref()
                .map_or(true, |d| d == budget.destination_address)
    }
}

/// Returns the budgets matching every field set on `filter`, in input order.
pub fn filter_budgets(budgets: &[Budget], filter: &BudgetFilter) -> Vec<Budget> {
    budgets
        .iter()
        .filter(|budget| filter.matches(budget))
        .cloned()
        .collect()
}

/// Groups budgets by source address. Keys iterate in ascending order.
pub fn budgets_by_source(budgets: &[Budget]) -> BTreeMap<&str, Vec<&Budget>> {
    let mut groups: BTreeMap<&str, Vec<&Budget>> = BTreeMap::new();
    for budget in budgets {
        groups
            .entry(budget.source_address.as_str())
            .or_default()
            .push(budget);
    }
    groups
}
