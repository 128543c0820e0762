use crate::planner::logical::LogicalNode;

/// Callback invoked once per node by [`LogicalNode::pre_order`] and
/// [`LogicalNode::post_order`].
pub trait LogicalNodeVisitor<'a> {
    fn visit(&mut self, node: &'a LogicalNode);
}

impl<'a, F> LogicalNodeVisitor<'a> for F
where
    F: FnMut(&'a LogicalNode),
{
    fn visit(&mut self, node: &'a LogicalNode) {
        self(node)
    }
}
