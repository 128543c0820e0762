use crate::{catalog::Schema, planner::logical::LogicalNode};

/// Materializes its input into `table_id`. A local store stays on the
/// worker that produced the rows.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreNode {
    pub table_id: String,
    pub local: bool,
    pub child: Option<Box<LogicalNode>>,
    pub in_schema: Schema,
    pub out_schema: Schema,
}

impl StoreNode {
    pub fn new(table_id: &str, local: bool) -> Self {
        Self {
            table_id: table_id.to_string(),
            local,
            child: None,
            in_schema: Schema::new(),
            out_schema: Schema::new(),
        }
    }

    pub fn with_child(mut self, child: LogicalNode) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    pub fn detached(&self) -> Self {
        Self {
            table_id: self.table_id.clone(),
            local: self.local,
            child: None,
            in_schema: self.in_schema.clone(),
            out_schema: self.out_schema.clone(),
        }
    }
}
