//! Module parameters: epoch length and the budget set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::param_value::ParamValue;
use super::params_validation::{validate_budgets_param, validate_epoch_blocks};
use crate::budgets::{validate_budgets, Budget};
use crate::constants::{DEFAULT_EPOCH_BLOCKS, PARAM_KEY_BUDGETS, PARAM_KEY_EPOCH_BLOCKS};
use crate::errors::{BudgetError, Error, Result};

/// Parameter set owned by the surrounding configuration layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Params {
    /// Epoch length in blocks. Collection runs once per epoch.
    pub epoch_blocks: u32,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            epoch_blocks: DEFAULT_EPOCH_BLOCKS,
            budgets: Vec::new(),
        }
    }
}

impl Params {
    pub fn new(epoch_blocks: u32, budgets: Vec<Budget>) -> Self {
        Self {
            epoch_blocks,
            budgets,
        }
    }

    /// Validates the whole parameter set.
    pub fn validate(&self) -> Result<()> {
        validate_epoch_blocks(&ParamValue::Uint32(self.epoch_blocks))?;
        validate_budgets(&self.budgets)
    }

    /// Validates `value` for `key` and, only if it passes, replaces the field.
    ///
    /// A budget list is checked record by record before the set-level checks.
    pub fn set_param(&mut self, key: ParamKey, value: ParamValue) -> Result<()> {
        match (key, value) {
            (ParamKey::EpochBlocks, ParamValue::Uint32(epoch_blocks)) => {
                self.epoch_blocks = epoch_blocks;
                Ok(())
            }
            (ParamKey::EpochBlocks, other) => validate_epoch_blocks(&other),
            (ParamKey::Budgets, ParamValue::Budgets(budgets)) => {
                budgets.iter().try_for_each(Budget::validate)?;
                validate_budgets(&budgets)?;
                self.budgets = budgets;
                Ok(())
            }
            (ParamKey::Budgets, other) => validate_budgets_param(&other),
        }
    }
}

impl fmt::Display for Params {
    /// Renders the two-field mapping, e.g. `epoch_blocks: 1\nbudgets: []\n`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "epoch_blocks: {}", self.epoch_blocks)?;
        if self.budgets.is_empty() {
            return writeln!(f, "budgets: []");
        }
        writeln!(f, "budgets:")?;
        for budget in &self.budgets {
            writeln!(f, "- name: {}", quoted(&budget.name)?)?;
            writeln!(f, "  rate: \"{}\"", budget.rate)?;
            writeln!(f, "  source_address: {}", quoted(&budget.source_address)?)?;
            writeln!(
                f,
                "  destination_address: {}",
                quoted(&budget.destination_address)?
            )?;
            writeln!(f, "  start_time: \"{}\"", budget.start_time.to_rfc3339())?;
            writeln!(f, "  end_time: \"{}\"", budget.end_time.to_rfc3339())?;
        }
        Ok(())
    }
}

/// Double-quoted scalar with JSON escapes, which YAML reads back verbatim.
fn quoted(value: &str) -> std::result::Result<String, fmt::Error> {
    serde_json::to_string(value).map_err(|_| fmt::Error)
}

/// Keys under which the parameter store holds each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    EpochBlocks,
    Budgets,
}

impl ParamKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKey::EpochBlocks => PARAM_KEY_EPOCH_BLOCKS,
            ParamKey::Budgets => PARAM_KEY_BUDGETS,
        }
    }

    /// Runs this key's validator against a loosely-typed value.
    pub fn validate(&self, value: &ParamValue) -> Result<()> {
        match self {
            ParamKey::EpochBlocks => validate_epoch_blocks(value),
            ParamKey::Budgets => validate_budgets_param(value),
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            PARAM_KEY_EPOCH_BLOCKS => Ok(ParamKey::EpochBlocks),
            PARAM_KEY_BUDGETS => Ok(ParamKey::Budgets),
            other => Err(BudgetError::UnknownParameter(other.to_string()).into()),
        }
    }
}
