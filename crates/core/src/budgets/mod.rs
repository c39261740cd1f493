//! Budgets module - domain models, set validation, and collectibility queries.

mod budgets_model;
mod budgets_query;
mod budgets_validation;


// Re-export the public interface
pub use budgets_model::{Budget, NewBudget};
pub use budgets_query::{budgets_by_source, collectible_budgets, filter_budgets, BudgetFilter};
pub use budgets_validation::{peak_total_rate, validate_budgets};
