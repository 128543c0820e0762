use serde::{Deserialize, Serialize};

use crate::catalog::Schema;

/// Descriptor of a base table as handed out by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDesc {
    pub table_id: String,
    /// Columns as stored; they need not be qualified.
    pub schema: Schema,
}

impl TableDesc {
    pub fn new(table_id: &str, schema: Schema) -> Self {
        Self { table_id: table_id.to_string(), schema }
    }
}
