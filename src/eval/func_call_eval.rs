use crate::{
    catalog::{Catalog, DataType, Schema},
    datum::{Datum, Tuple},
    eval::{EvalError, EvalNode},
    function::{Accumulator, FunctionDesc, FunctionInstance},
};

/// Call of a bound general or aggregate function.
///
/// Clones share the function instance; the descriptor and the argument
/// expressions are copied.
#[derive(Debug, Clone)]
pub struct FuncCallEval {
    pub desc: FunctionDesc,
    pub instance: FunctionInstance,
    pub args: Vec<EvalNode>,
}

impl PartialEq for FuncCallEval {
    fn eq(&self, other: &Self) -> bool {
        self.desc == other.desc && self.args == other.args
    }
}

impl FuncCallEval {
    /// Builds a call after checking that `args` fit the descriptor.
    pub fn new(desc: FunctionDesc, instance: FunctionInstance, args: Vec<EvalNode>) -> Result<Self, EvalError> {
        let arg_types: Vec<DataType> = args.iter().map(|a| a.value_type()).collect();
        if !desc.accepts(&arg_types) {
            return Err(EvalError::FunctionArgMismatch { name: desc.name.clone(), got: arg_types });
        }
        Ok(Self { desc, instance, args })
    }

    /// Resolves `name` against the catalog using the argument value types.
    pub fn bind(catalog: &dyn Catalog, name: &str, args: Vec<EvalNode>) -> Result<Self, EvalError> {
        let arg_types: Vec<DataType> = args.iter().map(|a| a.value_type()).collect();
        let (desc, instance) = catalog
            .function(name, &arg_types)
            .ok_or_else(|| EvalError::FunctionNotFound { name: name.to_ascii_lowercase(), arg_types })?;
        Self::new(desc, instance, args)
    }

    pub fn is_aggregation(&self) -> bool {
        self.instance.is_aggregation()
    }

    fn eval_args(&self, schema: &Schema, tuple: &Tuple) -> Result<Vec<Datum>, EvalError> {
        self.args.iter().map(|a| a.eval(schema, tuple)).collect()
    }

    pub fn eval(&self, schema: &Schema, tuple: &Tuple) -> Result<Datum, EvalError> {
        match &self.instance {
            FunctionInstance::General(f) => {
                let params = self.eval_args(schema, tuple)?;
                f.eval(&params)
            }
            FunctionInstance::Aggregation(_) => Err(EvalError::AggregateInScalarContext(self.desc.signature())),
        }
    }

    /// Fresh per-group state; `None` for general functions.
    pub fn create_accumulator(&self) -> Option<Box<dyn Accumulator>> {
        match &self.instance {
            FunctionInstance::Aggregation(f) => Some(f.create_accumulator()),
            FunctionInstance::General(_) => None,
        }
    }

    /// Feeds one input row into an aggregate's state.
    pub fn accumulate(&self, acc: &mut dyn Accumulator, schema: &Schema, tuple: &Tuple) -> Result<(), EvalError> {
        let params = self.eval_args(schema, tuple)?;
        acc.update(&params)
    }
}

impl From<FuncCallEval> for EvalNode {
    fn from(call: FuncCallEval) -> Self {
        EvalNode::Function(call)
    }
}
