//! Validators for values proposed through the loosely-typed update path.

use super::param_value::ParamValue;
use crate::budgets::validate_budgets;
use crate::errors::{BudgetError, Result};

/// Accepts only a `uint32` epoch length. Zero is allowed; range policy is
/// left to the caller.
pub fn validate_epoch_blocks(value: &ParamValue) -> Result<()> {
    match value {
        ParamValue::Uint32(_) => Ok(()),
        other => Err(invalid_type(other)),
    }
}

/// Requires a budget list and runs the set validator over it.
pub fn validate_budgets_param(value: &ParamValue) -> Result<()> {
    match value {
        ParamValue::Budgets(budgets) => validate_budgets(budgets),
        other => Err(invalid_type(other)),
    }
}

fn invalid_type(value: &ParamValue) -> crate::errors::Error {
    BudgetError::InvalidParameterType(value.kind().to_string()).into()
}
