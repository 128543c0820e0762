use crate::planner::logical::LogicalNode;

/// Route from a root to one of its descendants, as child indexes
/// (0 for a unary child or the outer side of a join, 1 for the inner side).
///
/// Paths are computed on a shared borrow and replayed on a mutable one, so a
/// search can hand out `&mut` access to the node it found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(vec![])
    }

    pub fn steps(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Path to the first node, in post-order, that satisfies `pred`.
    pub fn find_post_order<P>(root: &LogicalNode, pred: &P) -> Option<Self>
    where
        P: Fn(&LogicalNode) -> bool,
    {
        for (idx, child) in root.children().into_iter().enumerate() {
            if let Some(mut path) = Self::find_post_order(child, pred) {
                path.0.insert(0, idx);
                return Some(path);
            }
        }
        pred(root).then(Self::root)
    }

    pub fn walk<'a>(&self, root: &'a LogicalNode) -> Option<&'a LogicalNode> {
        self.0.iter().try_fold(root, |node, &idx| node.child_at(idx))
    }

    pub fn walk_mut<'a>(&self, root: &'a mut LogicalNode) -> Option<&'a mut LogicalNode> {
        let mut node = root;
        for &idx in &self.0 {
            node = node.child_at_mut(idx)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use crate::planner::{
        NodePath,
        _tests::fixtures,
        logical::{ExprType, LogicalNode},
    };

    #[test]
    fn finds_and_replays_paths() {
        let mut plan = fixtures::join_plan();
        let path = NodePath::find_post_order(&plan, &|n: &LogicalNode| n.expr_type() == ExprType::Scan).unwrap();
        // projection -> selection -> join -> outer scan
        assert_eq!(path.steps(), &[0, 0, 0]);
        assert_eq!(path.walk(&plan).map(|n| n.expr_type()), Some(ExprType::Scan));

        let node = path.walk_mut(&mut plan).unwrap();
        assert!(node.is_leaf());

        let root = NodePath::find_post_order(&plan, &|n: &LogicalNode| n.expr_type() == ExprType::Projection);
        assert_eq!(root, Some(NodePath::root()));
        assert!(NodePath::find_post_order(&plan, &|n: &LogicalNode| n.expr_type() == ExprType::Sort).is_none());
    }
}
