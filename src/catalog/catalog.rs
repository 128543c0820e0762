use indexmap::IndexMap;

use crate::{
    catalog::{DataType, TableDesc},
    function::{FunctionDesc, FunctionInstance, FunctionRegistry},
};

/// Read-only view of the metadata service.
///
/// The planner never mutates catalog state; it only asks for table schemas
/// when building scans and for resolved functions when binding calls.
pub trait Catalog {
    fn table(&self, table_id: &str) -> Option<TableDesc>;

    fn function(&self, name: &str, arg_types: &[DataType]) -> Option<(FunctionDesc, FunctionInstance)>;
}

/// In-process catalog backed by a table map and a function registry.
pub struct MemoryCatalog {
    tables: IndexMap<String, TableDesc>,
    functions: FunctionRegistry,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self { tables: IndexMap::new(), functions: FunctionRegistry::builtin().clone() }
    }
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(functions: FunctionRegistry) -> Self {
        Self { tables: IndexMap::new(), functions }
    }

    pub fn add_table(&mut self, desc: TableDesc) -> &mut Self {
        self.tables.insert(desc.table_id.clone(), desc);
        self
    }

    pub fn table_ids(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.functions
    }

    pub fn registry_mut(&mut self) -> &mut FunctionRegistry {
        &mut self.functions
    }
}

impl Catalog for MemoryCatalog {
    fn table(&self, table_id: &str) -> Option<TableDesc> {
        self.tables.get(table_id).cloned()
    }

    fn function(&self, name: &str, arg_types: &[DataType]) -> Option<(FunctionDesc, FunctionInstance)> {
        self.functions.resolve(name, arg_types)
    }
}
