//! Params module - parameter set, loosely-typed update values, and the
//! service gating updates into the parameter store.

mod param_value;
mod params_model;
mod params_service;
mod params_traits;
mod params_validation;

// Re-export the public interface
pub use param_value::ParamValue;
pub use params_model::{ParamKey, Params};
pub use params_service::ParamsService;
pub use params_traits::{ParamsRepositoryTrait, ParamsServiceTrait};
pub use params_validation::{validate_budgets_param, validate_epoch_blocks};
