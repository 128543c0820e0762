use crate::{
    catalog::Schema,
    planner::{Target, logical::LogicalNode},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionNode {
    pub targets: Vec<Target>,
    pub child: Option<Box<LogicalNode>>,
    pub in_schema: Schema,
    pub out_schema: Schema,
}

impl ProjectionNode {
    pub fn new(targets: Vec<Target>) -> Self {
        Self { targets, child: None, in_schema: Schema::new(), out_schema: Schema::new() }
    }

    pub fn with_child(mut self, child: LogicalNode) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    pub fn detached(&self) -> Self {
        Self {
            targets: self.targets.clone(),
            child: None,
            in_schema: self.in_schema.clone(),
            out_schema: self.out_schema.clone(),
        }
    }
}
