//! Loosely-typed parameter values.
//!
//! Parameter updates can arrive through an untyped channel (a proposal
//! payload, an admin command). `ParamValue` captures what was actually
//! supplied so validators can reject a mismatched kind with a message naming
//! it. Inside the crate parameters are always strongly typed.

use crate::budgets::Budget;

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// No value was supplied.
    Nil,
    /// A platform-width signed integer.
    Int(i64),
    Int64(i64),
    Uint32(u32),
    Uint64(u64),
    Float64(f64),
    String(String),
    Bool(bool),
    Budgets(Vec<Budget>),
}

impl ParamValue {
    /// Name of the observed kind, as shown in `invalid parameter type` errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::Nil => "<nil>",
            ParamValue::Int(_) => "int",
            ParamValue::Int64(_) => "int64",
            ParamValue::Uint32(_) => "uint32",
            ParamValue::Uint64(_) => "uint64",
            ParamValue::Float64(_) => "float64",
            ParamValue::String(_) => "string",
            ParamValue::Bool(_) => "bool",
            ParamValue::Budgets(_) => "[]Budget",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, ParamValue::Nil)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Uint32(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int64(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Uint64(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float64(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<Vec<Budget>> for ParamValue {
    fn from(value: Vec<Budget>) -> Self {
        ParamValue::Budgets(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Nil, Into::into)
    }
}
