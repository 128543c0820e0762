use crate::planner::{
    NodePath, PlannerUtil,
    logical::{ExprType, LogicalNode, LogicalNodeVisitor},
};

/// Collects nodes of one type in visiting order.
struct NodeFinder<'a> {
    ty: ExprType,
    found: Vec<&'a LogicalNode>,
}

impl<'a> LogicalNodeVisitor<'a> for NodeFinder<'a> {
    fn visit(&mut self, node: &'a LogicalNode) {
        if node.expr_type() == self.ty {
            self.found.push(node);
        }
    }
}

/// Collects nodes that have a child of one type.
struct ParentNodeFinder<'a> {
    ty: ExprType,
    found: Vec<&'a LogicalNode>,
}

impl<'a> LogicalNodeVisitor<'a> for ParentNodeFinder<'a> {
    fn visit(&mut self, node: &'a LogicalNode) {
        if PlannerUtil::has_child_of_type(node, self.ty) {
            self.found.push(node);
        }
    }
}

impl PlannerUtil {
    /// First node of type `ty` in post-order, i.e. the one nearest the
    /// leaves on the leftmost path.
    pub fn find_top_node(plan: &LogicalNode, ty: ExprType) -> Option<&LogicalNode> {
        Self::find_all_nodes(plan, ty).into_iter().next()
    }

    /// Every node of type `ty`, in post-order.
    pub fn find_all_nodes(plan: &LogicalNode, ty: ExprType) -> Vec<&LogicalNode> {
        let mut finder = NodeFinder { ty, found: vec![] };
        plan.post_order(&mut finder);
        finder.found
    }

    /// First node, in post-order, with a child of type `ty`.
    pub fn find_top_parent_node(plan: &LogicalNode, ty: ExprType) -> Option<&LogicalNode> {
        let mut finder = ParentNodeFinder { ty, found: vec![] };
        plan.post_order(&mut finder);
        finder.found.into_iter().next()
    }

    pub fn find_top_node_mut(plan: &mut LogicalNode, ty: ExprType) -> Option<&mut LogicalNode> {
        let path = NodePath::find_post_order(plan, &|n: &LogicalNode| n.expr_type() == ty)?;
        path.walk_mut(plan)
    }

    pub fn find_top_parent_node_mut(plan: &mut LogicalNode, ty: ExprType) -> Option<&mut LogicalNode> {
        let path = NodePath::find_post_order(plan, &|n: &LogicalNode| Self::has_child_of_type(n, ty))?;
        path.walk_mut(plan)
    }

    /// Ids of the tables scanned by `plan`, in post-order.
    pub fn get_lineage(plan: &LogicalNode) -> Vec<String> {
        Self::find_all_nodes(plan, ExprType::Scan)
            .into_iter()
            .filter_map(|node| match node {
                LogicalNode::Scan(scan) => Some(scan.table_id().to_string()),
                _ => None,
            })
            .collect()
    }
}
