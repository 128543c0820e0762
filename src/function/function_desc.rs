use serde::{Deserialize, Serialize};

use crate::catalog::DataType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionType {
    General,
    Aggregation,
}

/// Resolved signature of a function as registered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionDesc {
    /// Canonical lowercase name ("sum", "abs", ...).
    pub name: String,
    pub param_types: Vec<DataType>,
    pub return_type: DataType,
    pub kind: FunctionType,
}

impl FunctionDesc {
    pub fn new(name: &str, param_types: Vec<DataType>, return_type: DataType, kind: FunctionType) -> Self {
        Self { name: name.to_ascii_lowercase(), param_types, return_type, kind }
    }

    pub fn general(name: &str, param_types: Vec<DataType>, return_type: DataType) -> Self {
        Self::new(name, param_types, return_type, FunctionType::General)
    }

    pub fn aggregation(name: &str, param_types: Vec<DataType>, return_type: DataType) -> Self {
        Self::new(name, param_types, return_type, FunctionType::Aggregation)
    }

    pub fn arity(&self) -> usize {
        self.param_types.len()
    }

    /// `name(type,type)`
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.param_types.iter().map(|t| t.to_string()).collect();
        format!("{}({})", self.name, params.join(","))
    }

    /// Whether a call with `arg_types` can bind to this descriptor.
    /// A NULL argument matches any parameter type.
    pub fn accepts(&self, arg_types: &[DataType]) -> bool {
        self.param_types.len() == arg_types.len()
            && self.param_types.iter().zip(arg_types).all(|(p, a)| p == a || *a == DataType::Null)
    }
}
