use std::{fmt, sync::Arc};

use crate::{datum::Datum, eval::EvalError, function::Accumulator};

/// A scalar function: one output value per input row.
pub trait GeneralFunction: Send + Sync {
    fn eval(&self, params: &[Datum]) -> Result<Datum, EvalError>;
}

/// An aggregate function. Stateless factory of per-group accumulators.
pub trait AggFunction: Send + Sync {
    fn create_accumulator(&self) -> Box<dyn Accumulator>;
}

/// Callable bound to a function-call expression.
///
/// Cloning shares the underlying implementation.
#[derive(Clone)]
pub enum FunctionInstance {
    General(Arc<dyn GeneralFunction>),
    Aggregation(Arc<dyn AggFunction>),
}

impl FunctionInstance {
    pub fn is_aggregation(&self) -> bool {
        matches!(self, FunctionInstance::Aggregation(_))
    }
}

impl fmt::Debug for FunctionInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionInstance::General(_) => write!(f, "FunctionInstance::General"),
            FunctionInstance::Aggregation(_) => write!(f, "FunctionInstance::Aggregation"),
        }
    }
}
