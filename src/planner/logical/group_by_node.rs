use crate::{
    catalog::{Column, Schema},
    eval::EvalNode,
    planner::{Target, logical::LogicalNode},
};

/// Grouping with aggregate targets and an optional HAVING filter.
///
/// Targets usually list the grouping columns first and the aggregate calls
/// after them; the output schema follows the target order.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupByNode {
    pub grouping_columns: Vec<Column>,
    pub targets: Vec<Target>,
    pub having: Option<EvalNode>,
    pub child: Option<Box<LogicalNode>>,
    pub in_schema: Schema,
    pub out_schema: Schema,
}

impl GroupByNode {
    pub fn new(grouping_columns: Vec<Column>, targets: Vec<Target>) -> Self {
        Self {
            grouping_columns,
            targets,
            having: None,
            child: None,
            in_schema: Schema::new(),
            out_schema: Schema::new(),
        }
    }

    pub fn with_having(mut self, having: EvalNode) -> Self {
        self.having = Some(having);
        self
    }

    pub fn with_child(mut self, child: LogicalNode) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    pub fn detached(&self) -> Self {
        Self {
            grouping_columns: self.grouping_columns.clone(),
            targets: self.targets.clone(),
            having: self.having.clone(),
            child: None,
            in_schema: self.in_schema.clone(),
            out_schema: self.out_schema.clone(),
        }
    }
}
