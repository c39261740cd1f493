//! Parameter store and service traits.
//!
//! The store is an external collaborator: the host system persists the
//! parameter set however it likes and exposes it through this contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::param_value::ParamValue;
use super::params_model::Params;
use crate::budgets::{Budget, NewBudget};
use crate::errors::Result;

/// Trait defining the contract for parameter store operations.
#[async_trait]
pub trait ParamsRepositoryTrait: Send + Sync {
    /// Loads the current parameter set.
    fn get_params(&self) -> Result<Params>;

    /// Replaces the stored parameter set.
    ///
    /// Only called with a set that has already been validated.
    async fn save_params(&self, params: Params) -> Result<()>;
}

/// Trait defining the contract for parameter service operations.
#[async_trait]
pub trait ParamsServiceTrait: Send + Sync {
    fn get_params(&self) -> Result<Params>;

    fn epoch_blocks(&self) -> Result<u32>;

    /// Validates and applies a single loosely-typed parameter update.
    async fn update_param(&self, key: &str, value: ParamValue) -> Result<Params>;

    /// Replaces the budget set with the proposed records.
    async fn update_budgets(&self, new_budgets: Vec<NewBudget>) -> Result<Params>;

    /// Budgets eligible for disbursement at `at`.
    fn collectible_budgets(&self, at: DateTime<Utc>) -> Result<Vec<Budget>>;
}
