use crate::{
    catalog::Schema,
    planner::{SortSpec, logical::LogicalNode},
};

#[derive(Debug, Clone, PartialEq)]
pub struct SortNode {
    pub sort_keys: Vec<SortSpec>,
    pub child: Option<Box<LogicalNode>>,
    pub in_schema: Schema,
    pub out_schema: Schema,
}

impl SortNode {
    pub fn new(sort_keys: Vec<SortSpec>) -> Self {
        Self { sort_keys, child: None, in_schema: Schema::new(), out_schema: Schema::new() }
    }

    pub fn with_child(mut self, child: LogicalNode) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    pub fn detached(&self) -> Self {
        Self {
            sort_keys: self.sort_keys.clone(),
            child: None,
            in_schema: self.in_schema.clone(),
            out_schema: self.out_schema.clone(),
        }
    }
}
