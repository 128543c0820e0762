use std::{collections::HashMap, sync::Arc};

use once_cell::sync::Lazy;

use crate::{
    catalog::DataType,
    function::{
        AbsImpl, AggFunction, CountImpl, FunctionDesc, FunctionInstance, GeneralFunction, LengthImpl, LowerImpl,
        MaxImpl, MinImpl, SumImpl, UpperImpl,
    },
};

static BUILTIN: Lazy<FunctionRegistry> = Lazy::new(FunctionRegistry::default_function_registry);

/// Case-insensitive registry of function overloads. Cloning shares the
/// function instances.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    by_name: HashMap<String, Vec<(FunctionDesc, FunctionInstance)>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self { by_name: HashMap::new() }
    }

    /// Shared registry holding the builtin functions.
    pub fn builtin() -> &'static FunctionRegistry {
        &BUILTIN
    }

    pub fn register(&mut self, desc: FunctionDesc, instance: FunctionInstance) {
        self.by_name.entry(desc.name.clone()).or_default().push((desc, instance));
    }

    pub fn register_general<F: GeneralFunction + 'static>(&mut self, desc: FunctionDesc, function: F) {
        self.register(desc, FunctionInstance::General(Arc::new(function)));
    }

    pub fn register_aggregation<F: AggFunction + 'static>(&mut self, desc: FunctionDesc, function: F) {
        self.register(desc, FunctionInstance::Aggregation(Arc::new(function)));
    }

    /// First overload of `name` accepting `arg_types`.
    pub fn resolve(&self, name: &str, arg_types: &[DataType]) -> Option<(FunctionDesc, FunctionInstance)> {
        self.by_name
            .get(&name.to_ascii_lowercase())?
            .iter()
            .find(|(desc, _)| desc.accepts(arg_types))
            .cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_ascii_lowercase())
    }

    pub fn list(&self) -> Vec<String> {
        let mut v: Vec<_> = self.by_name.keys().cloned().collect();
        v.sort();
        v
    }

    pub fn default_function_registry() -> Self {
        use DataType::*;

        let mut registry = Self::new();
        for ty in [Int, Long, Double] {
            registry.register_general(FunctionDesc::general("abs", vec![ty], ty), AbsImpl);
        }
        registry.register_general(FunctionDesc::general("upper", vec![Text], Text), UpperImpl);
        registry.register_general(FunctionDesc::general("lower", vec![Text], Text), LowerImpl);
        registry.register_general(FunctionDesc::general("length", vec![Text], Int), LengthImpl);

        for ty in [Int, Long, Double] {
            let ret = if ty == Double { Double } else { Long };
            registry.register_aggregation(FunctionDesc::aggregation("sum", vec![ty], ret), SumImpl);
        }
        for ty in [Boolean, Short, Int, Long, Float, Double, Text] {
            registry.register_aggregation(FunctionDesc::aggregation("count", vec![ty], Long), CountImpl);
            registry.register_aggregation(FunctionDesc::aggregation("min", vec![ty], ty), MinImpl);
            registry.register_aggregation(FunctionDesc::aggregation("max", vec![ty], ty), MaxImpl);
        }
        registry.register_aggregation(FunctionDesc::aggregation("count", vec![], Long), CountImpl);
        registry
    }
}
