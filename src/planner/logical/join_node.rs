use serde::{Deserialize, Serialize};

use crate::{catalog::Schema, eval::EvalNode, planner::logical::LogicalNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinType {
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
    Cross,
}

/// Binary join; the output row is the outer row followed by the inner row.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinNode {
    pub join_type: JoinType,
    pub outer: Box<LogicalNode>,
    pub inner: Box<LogicalNode>,
    pub qual: Option<EvalNode>,
    pub in_schema: Schema,
    pub out_schema: Schema,
}

impl JoinNode {
    pub fn new(join_type: JoinType, outer: LogicalNode, inner: LogicalNode) -> Self {
        Self {
            join_type,
            outer: Box::new(outer),
            inner: Box::new(inner),
            qual: None,
            in_schema: Schema::new(),
            out_schema: Schema::new(),
        }
    }

    pub fn with_qual(mut self, qual: EvalNode) -> Self {
        self.qual = Some(qual);
        self
    }
}
