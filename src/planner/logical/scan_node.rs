use crate::{
    catalog::{Catalog, CatalogError, Schema, TableDesc},
    eval::EvalNode,
    planner::PlannerError,
};

/// Leaf reading a base table, with an optional pushed-down filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanNode {
    pub table: TableDesc,
    pub qual: Option<EvalNode>,
    pub in_schema: Schema,
    pub out_schema: Schema,
}

impl ScanNode {
    /// The output columns are the table's columns qualified by its id.
    pub fn new(table: TableDesc) -> Result<Self, CatalogError> {
        let out_schema = table.schema.qualify(&table.table_id)?;
        Ok(Self { in_schema: table.schema.clone(), out_schema, table, qual: None })
    }

    pub fn from_catalog(catalog: &dyn Catalog, table_id: &str) -> Result<Self, PlannerError> {
        let table = catalog
            .table(table_id)
            .ok_or_else(|| CatalogError::UnknownTable(table_id.to_string()))?;
        Ok(Self::new(table)?)
    }

    pub fn with_qual(mut self, qual: EvalNode) -> Self {
        self.qual = Some(qual);
        self
    }

    pub fn table_id(&self) -> &str {
        &self.table.table_id
    }
}
