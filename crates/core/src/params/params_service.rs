use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::sync::Arc;

use super::param_value::ParamValue;
use super::params_model::{ParamKey, Params};
use super::params_traits::{ParamsRepositoryTrait, ParamsServiceTrait};
use crate::budgets::{self, Budget, NewBudget};
use crate::errors::Result;

/// Gatekeeper between proposed parameter changes and the parameter store.
pub struct ParamsService {
    params_repository: Arc<dyn ParamsRepositoryTrait>,
}

impl ParamsService {
    pub fn new(params_repository: Arc<dyn ParamsRepositoryTrait>) -> Self {
        ParamsService { params_repository }
    }
}

#[async_trait]
impl ParamsServiceTrait for ParamsService {
    fn get_params(&self) -> Result<Params> {
        self.params_repository.get_params()
    }

    fn epoch_blocks(&self) -> Result<u32> {
        Ok(self.params_repository.get_params()?.epoch_blocks)
    }

    async fn update_param(&self, key: &str, value: ParamValue) -> Result<Params> {
        let key: ParamKey = key.parse()?;
        let mut params = self.params_repository.get_params()?;

        debug!("Proposed update for {} ({})", key, value.kind());
        if let Err(e) = params.set_param(key, value) {
            warn!("Rejected update for {}: {}", key, e);
            return Err(e);
        }

        self.params_repository.save_params(params.clone()).await?;
        debug!("Accepted update for {}", key);
        Ok(params)
    }

    async fn update_budgets(&self, new_budgets: Vec<NewBudget>) -> Result<Params> {
        let candidate = new_budgets
            .into_iter()
            .map(NewBudget::into_budget)
            .collect::<Result<Vec<Budget>>>()
            .map_err(|e| {
                warn!("Rejected budget proposal: {}", e);
                e
            })?;

        let mut params = self.params_repository.get_params()?;
        if let Err(e) = params.set_param(ParamKey::Budgets, ParamValue::Budgets(candidate)) {
            warn!("Rejected budget proposal: {}", e);
            return Err(e);
        }

        self.params_repository.save_params(params.clone()).await?;
        debug!("Accepted budget set with {} budgets", params.budgets.len());
        Ok(params)
    }

    fn collectible_budgets(&self, at: DateTime<Utc>) -> Result<Vec<Budget>> {
        let params = self.params_repository.get_params()?;
        let collectible = budgets::collectible_budgets(&params.budgets, at);
        debug!(
            "{} of {} budgets collectible at {}",
            collectible.len(),
            params.budgets.len(),
            at
        );
        Ok(collectible)
    }
}
