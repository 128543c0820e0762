use crate::{catalog::Schema, eval::EvalNode, planner::logical::LogicalNode};

/// Row filter.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionNode {
    pub qual: EvalNode,
    pub child: Option<Box<LogicalNode>>,
    pub in_schema: Schema,
    pub out_schema: Schema,
}

impl SelectionNode {
    pub fn new(qual: EvalNode) -> Self {
        Self { qual, child: None, in_schema: Schema::new(), out_schema: Schema::new() }
    }

    pub fn with_child(mut self, child: LogicalNode) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    pub fn detached(&self) -> Self {
        Self {
            qual: self.qual.clone(),
            child: None,
            in_schema: self.in_schema.clone(),
            out_schema: self.out_schema.clone(),
        }
    }
}
