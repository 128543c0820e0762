use crate::{
    catalog::Schema,
    planner::{
        PlannerError,
        logical::{
            ExprType, GroupByNode, JoinNode, LogicalNodeVisitor, ProjectionNode, ScanNode, SelectionNode, SortNode,
            StoreNode,
        },
    },
};

/// A node of the logical plan tree.
///
/// Every node owns its input and output schemas. Unary nodes own at most one
/// child: a freshly built unary node has none until an editing primitive
/// splices it into a tree. Joins always own both children.
#[derive(Debug, Clone, PartialEq)]
pub enum LogicalNode {
    Scan(ScanNode),
    Selection(SelectionNode),
    Projection(ProjectionNode),
    GroupBy(GroupByNode),
    Sort(SortNode),
    Store(StoreNode),
    Join(JoinNode),
}

impl LogicalNode {
    pub fn expr_type(&self) -> ExprType {
        match self {
            LogicalNode::Scan(_) => ExprType::Scan,
            LogicalNode::Selection(_) => ExprType::Selection,
            LogicalNode::Projection(_) => ExprType::Projection,
            LogicalNode::GroupBy(_) => ExprType::GroupBy,
            LogicalNode::Sort(_) => ExprType::Sort,
            LogicalNode::Store(_) => ExprType::Store,
            LogicalNode::Join(_) => ExprType::Join,
        }
    }

    fn schemas(&self) -> (&Schema, &Schema) {
        match self {
            LogicalNode::Scan(n) => (&n.in_schema, &n.out_schema),
            LogicalNode::Selection(n) => (&n.in_schema, &n.out_schema),
            LogicalNode::Projection(n) => (&n.in_schema, &n.out_schema),
            LogicalNode::GroupBy(n) => (&n.in_schema, &n.out_schema),
            LogicalNode::Sort(n) => (&n.in_schema, &n.out_schema),
            LogicalNode::Store(n) => (&n.in_schema, &n.out_schema),
            LogicalNode::Join(n) => (&n.in_schema, &n.out_schema),
        }
    }

    fn schemas_mut(&mut self) -> (&mut Schema, &mut Schema) {
        match self {
            LogicalNode::Scan(n) => (&mut n.in_schema, &mut n.out_schema),
            LogicalNode::Selection(n) => (&mut n.in_schema, &mut n.out_schema),
            LogicalNode::Projection(n) => (&mut n.in_schema, &mut n.out_schema),
            LogicalNode::GroupBy(n) => (&mut n.in_schema, &mut n.out_schema),
            LogicalNode::Sort(n) => (&mut n.in_schema, &mut n.out_schema),
            LogicalNode::Store(n) => (&mut n.in_schema, &mut n.out_schema),
            LogicalNode::Join(n) => (&mut n.in_schema, &mut n.out_schema),
        }
    }

    pub fn in_schema(&self) -> &Schema {
        self.schemas().0
    }

    pub fn out_schema(&self) -> &Schema {
        self.schemas().1
    }

    pub fn set_in_schema(&mut self, schema: Schema) {
        *self.schemas_mut().0 = schema;
    }

    pub fn set_out_schema(&mut self, schema: Schema) {
        *self.schemas_mut().1 = schema;
    }

    pub fn is_unary(&self) -> bool {
        !self.is_leaf() && !self.is_binary()
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, LogicalNode::Join(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, LogicalNode::Scan(_))
    }

    fn child_slot(&self) -> Option<&Option<Box<LogicalNode>>> {
        match self {
            LogicalNode::Selection(n) => Some(&n.child),
            LogicalNode::Projection(n) => Some(&n.child),
            LogicalNode::GroupBy(n) => Some(&n.child),
            LogicalNode::Sort(n) => Some(&n.child),
            LogicalNode::Store(n) => Some(&n.child),
            LogicalNode::Scan(_) | LogicalNode::Join(_) => None,
        }
    }

    fn child_slot_mut(&mut self) -> Option<&mut Option<Box<LogicalNode>>> {
        match self {
            LogicalNode::Selection(n) => Some(&mut n.child),
            LogicalNode::Projection(n) => Some(&mut n.child),
            LogicalNode::GroupBy(n) => Some(&mut n.child),
            LogicalNode::Sort(n) => Some(&mut n.child),
            LogicalNode::Store(n) => Some(&mut n.child),
            LogicalNode::Scan(_) | LogicalNode::Join(_) => None,
        }
    }

    /// The only child of a unary node.
    pub fn child(&self) -> Option<&LogicalNode> {
        self.child_slot()?.as_deref()
    }

    pub fn child_mut(&mut self) -> Option<&mut LogicalNode> {
        self.child_slot_mut()?.as_deref_mut()
    }

    /// A unary node without a child.
    pub fn is_detached(&self) -> bool {
        matches!(self.child_slot(), Some(None))
    }

    /// Attaches `child` to a unary node and returns the previous child.
    pub fn set_child(&mut self, child: LogicalNode) -> Result<Option<LogicalNode>, PlannerError> {
        let ty = self.expr_type();
        let slot = self
            .child_slot_mut()
            .ok_or_else(|| PlannerError::PreconditionViolation(format!("{} has no single child", ty)))?;
        Ok(slot.replace(Box::new(child)).map(|b| *b))
    }

    /// Detaches and returns the child of a unary node.
    pub fn take_child(&mut self) -> Option<LogicalNode> {
        self.child_slot_mut()?.take().map(|b| *b)
    }

    pub fn outer(&self) -> Option<&LogicalNode> {
        match self {
            LogicalNode::Join(j) => Some(&*j.outer),
            _ => None,
        }
    }

    pub fn inner(&self) -> Option<&LogicalNode> {
        match self {
            LogicalNode::Join(j) => Some(&*j.inner),
            _ => None,
        }
    }

    pub fn outer_mut(&mut self) -> Option<&mut LogicalNode> {
        match self {
            LogicalNode::Join(j) => Some(&mut *j.outer),
            _ => None,
        }
    }

    pub fn inner_mut(&mut self) -> Option<&mut LogicalNode> {
        match self {
            LogicalNode::Join(j) => Some(&mut *j.inner),
            _ => None,
        }
    }

    /// Replaces the outer child of a join, returning the old one.
    pub fn set_outer(&mut self, node: LogicalNode) -> Result<LogicalNode, PlannerError> {
        match self {
            LogicalNode::Join(j) => Ok(*std::mem::replace(&mut j.outer, Box::new(node))),
            other => Err(PlannerError::PreconditionViolation(format!("{} has no outer child", other.expr_type()))),
        }
    }

    /// Replaces the inner child of a join, returning the old one.
    pub fn set_inner(&mut self, node: LogicalNode) -> Result<LogicalNode, PlannerError> {
        match self {
            LogicalNode::Join(j) => Ok(*std::mem::replace(&mut j.inner, Box::new(node))),
            other => Err(PlannerError::PreconditionViolation(format!("{} has no inner child", other.expr_type()))),
        }
    }

    /// Children in visiting order: the child of a unary node, or outer then
    /// inner for a join.
    pub fn children(&self) -> Vec<&LogicalNode> {
        match self {
            LogicalNode::Join(j) => vec![&*j.outer, &*j.inner],
            other => other.child().into_iter().collect(),
        }
    }

    pub fn child_at(&self, idx: usize) -> Option<&LogicalNode> {
        match (self, idx) {
            (LogicalNode::Join(j), 0) => Some(&*j.outer),
            (LogicalNode::Join(j), 1) => Some(&*j.inner),
            (LogicalNode::Join(_), _) => None,
            (other, 0) => other.child(),
            _ => None,
        }
    }

    pub fn child_at_mut(&mut self, idx: usize) -> Option<&mut LogicalNode> {
        match (self, idx) {
            (LogicalNode::Join(j), 0) => Some(&mut *j.outer),
            (LogicalNode::Join(j), 1) => Some(&mut *j.inner),
            (LogicalNode::Join(_), _) => None,
            (other, 0) => other.child_mut(),
            _ => None,
        }
    }

    pub fn pre_order<'a, V: LogicalNodeVisitor<'a>>(&'a self, visitor: &mut V) {
        visitor.visit(self);
        for child in self.children() {
            child.pre_order(visitor);
        }
    }

    pub fn post_order<'a, V: LogicalNodeVisitor<'a>>(&'a self, visitor: &mut V) {
        for child in self.children() {
            child.post_order(visitor);
        }
        visitor.visit(self);
    }

    pub fn pre_order_mut<F>(&mut self, f: &mut F) -> Result<(), PlannerError>
    where
        F: FnMut(&mut LogicalNode) -> Result<(), PlannerError>,
    {
        f(self)?;
        let mut idx = 0;
        while let Some(child) = self.child_at_mut(idx) {
            child.pre_order_mut(f)?;
            idx += 1;
        }
        Ok(())
    }

    pub fn post_order_mut<F>(&mut self, f: &mut F) -> Result<(), PlannerError>
    where
        F: FnMut(&mut LogicalNode) -> Result<(), PlannerError>,
    {
        let mut idx = 0;
        while let Some(child) = self.child_at_mut(idx) {
            child.post_order_mut(f)?;
            idx += 1;
        }
        f(self)
    }

    /// Number of nodes in the subtree rooted here.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(|c| c.size()).sum::<usize>()
    }

    /// Copy of this node without its subtree. Leaves and joins are copied
    /// whole since they cannot exist without their children.
    pub fn clone_detached(&self) -> LogicalNode {
        match self {
            LogicalNode::Selection(n) => LogicalNode::Selection(n.detached()),
            LogicalNode::Projection(n) => LogicalNode::Projection(n.detached()),
            LogicalNode::GroupBy(n) => LogicalNode::GroupBy(n.detached()),
            LogicalNode::Sort(n) => LogicalNode::Sort(n.detached()),
            LogicalNode::Store(n) => LogicalNode::Store(n.detached()),
            other => other.clone(),
        }
    }
}

impl From<ScanNode> for LogicalNode {
    fn from(node: ScanNode) -> Self {
        LogicalNode::Scan(node)
    }
}

impl From<SelectionNode> for LogicalNode {
    fn from(node: SelectionNode) -> Self {
        LogicalNode::Selection(node)
    }
}

impl From<ProjectionNode> for LogicalNode {
    fn from(node: ProjectionNode) -> Self {
        LogicalNode::Projection(node)
    }
}

impl From<GroupByNode> for LogicalNode {
    fn from(node: GroupByNode) -> Self {
        LogicalNode::GroupBy(node)
    }
}

impl From<SortNode> for LogicalNode {
    fn from(node: SortNode) -> Self {
        LogicalNode::Sort(node)
    }
}

impl From<StoreNode> for LogicalNode {
    fn from(node: StoreNode) -> Self {
        LogicalNode::Store(node)
    }
}

impl From<JoinNode> for LogicalNode {
    fn from(node: JoinNode) -> Self {
        LogicalNode::Join(node)
    }
}

#[cfg(test)]
mod tests {
    use crate::planner::{
        _tests::fixtures,
        logical::{ExprType, LogicalNode, SelectionNode, StoreNode},
    };

    #[test]
    fn arity_and_children() {
        let plan = fixtures::join_plan();
        assert_eq!(plan.expr_type(), ExprType::Projection);
        assert!(plan.is_unary());

        let join = plan.child().and_then(|s| s.child()).unwrap();
        assert!(join.is_binary());
        assert_eq!(join.children().len(), 2);
        assert!(join.outer().unwrap().is_leaf());
        assert!(join.child().is_none());
        assert_eq!(plan.size(), 5);
    }

    #[test]
    fn traversal_orders() {
        let plan = fixtures::join_plan();
        let mut pre = vec![];
        plan.pre_order(&mut |n: &LogicalNode| pre.push(n.expr_type()));
        assert_eq!(
            pre,
            vec![ExprType::Projection, ExprType::Selection, ExprType::Join, ExprType::Scan, ExprType::Scan]
        );

        let mut post = vec![];
        plan.post_order(&mut |n: &LogicalNode| post.push(n.expr_type()));
        assert_eq!(
            post,
            vec![ExprType::Scan, ExprType::Scan, ExprType::Join, ExprType::Selection, ExprType::Projection]
        );
    }

    #[test]
    fn mutable_traversal_visits_every_node() {
        let mut plan = fixtures::join_plan();
        let mut count = 0;
        plan.post_order_mut(&mut |_n: &mut LogicalNode| {
            count += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(count, 5);
    }

    #[test]
    fn child_slots() {
        let mut store: LogicalNode = StoreNode::new("tmp", true).into();
        assert!(store.is_detached());
        assert!(store.take_child().is_none());

        let previous = store.set_child(fixtures::people_scan()).unwrap();
        assert!(previous.is_none());
        assert!(!store.is_detached());

        let mut scan = fixtures::people_scan();
        assert!(scan.set_child(SelectionNode::new(fixtures::adults()).into()).is_err());
        assert!(scan.set_outer(fixtures::people_scan()).is_err());
    }

    #[test]
    fn clones_are_deep_and_detached_clones_are_shallow() {
        let plan = fixtures::join_plan();
        let copy = plan.clone();
        assert_eq!(copy, plan);

        let detached = plan.clone_detached();
        assert_eq!(detached.expr_type(), ExprType::Projection);
        assert!(detached.is_detached());
        assert_eq!(detached.out_schema(), plan.out_schema());
    }
}
