use std::fmt;

use crate::{catalog::CatalogError, eval::EvalError};

#[derive(Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// An editing or transform primitive was called on the wrong kind of node.
    PreconditionViolation(String),
    /// The tree does not have the shape the operation needs.
    InvalidPlanShape(String),
    WrongJoinKey(String),
    Catalog(CatalogError),
    Eval(EvalError),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::PreconditionViolation(msg) => write!(f, "precondition violated: {}", msg),
            PlannerError::InvalidPlanShape(msg) => write!(f, "invalid plan: {}", msg),
            PlannerError::WrongJoinKey(qual) => write!(f, "wrong join key: {}", qual),
            PlannerError::Catalog(e) => write!(f, "{}", e),
            PlannerError::Eval(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlannerError::Catalog(e) => Some(e),
            PlannerError::Eval(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CatalogError> for PlannerError {
    fn from(e: CatalogError) -> Self {
        PlannerError::Catalog(e)
    }
}

impl From<EvalError> for PlannerError {
    fn from(e: EvalError) -> Self {
        PlannerError::Eval(e)
    }
}
