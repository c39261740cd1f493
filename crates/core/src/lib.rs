//! Budget Core - scheduled-disbursement validation and collectibility queries.
//!
//! A budget commits a fraction of a source address's disbursable pool to a
//! destination for a half-open time window. This crate validates budget sets
//! (unique names, no source committing more than 100% at any instant) and
//! answers which budgets are collectible at a given time. It is
//! storage-agnostic: the parameter store is reached through
//! [`params::ParamsRepositoryTrait`].

pub mod budgets;
pub mod constants;
pub mod errors;
pub mod params;
pub mod utils;

// Re-export the main entry points
pub use budgets::{collectible_budgets, validate_budgets, Budget, NewBudget};
pub use params::{validate_epoch_blocks, ParamKey, ParamValue, Params};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
