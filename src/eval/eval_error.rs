use std::fmt;

use crate::catalog::DataType;

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    InvalidCast { from: DataType, to: DataType },
    TypeMismatch { left: DataType, right: DataType },
    NotImplemented(String),
    UnknownColumn(String),
    DivisionByZero,
    FunctionNotFound { name: String, arg_types: Vec<DataType> },
    FunctionArgMismatch { name: String, got: Vec<DataType> },
    AggregateInScalarContext(String),
}

fn type_list(types: &[DataType]) -> String {
    types.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(",")
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidCast { from, to } => write!(f, "cannot cast {} to {}", from, to),
            EvalError::TypeMismatch { left, right } => write!(f, "incompatible operand types {} and {}", left, right),
            EvalError::NotImplemented(what) => write!(f, "not implemented: {}", what),
            EvalError::UnknownColumn(name) => write!(f, "column \"{}\" is not in the input schema", name),
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::FunctionNotFound { name, arg_types } => {
                write!(f, "function {}({}) does not exist", name, type_list(arg_types))
            }
            EvalError::FunctionArgMismatch { name, got } => {
                write!(f, "function {} cannot take arguments ({})", name, type_list(got))
            }
            EvalError::AggregateInScalarContext(sig) => {
                write!(f, "aggregate {} cannot be evaluated on a single row", sig)
            }
        }
    }
}

impl std::error::Error for EvalError {}
