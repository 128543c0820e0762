use tracing::debug;

use crate::planner::{
    NodePath, PlannerError, PlannerUtil,
    logical::{ExprType, LogicalNode},
};

impl PlannerUtil {
    /// Splices the detached unary `new_node` between `parent` and its child.
    /// The new node takes the old child's output schema as both its input
    /// and output schema. Returns `parent`.
    pub fn insert_node(parent: &mut LogicalNode, new_node: LogicalNode) -> Result<&mut LogicalNode, PlannerError> {
        Self::require_unary_parent(parent)?;
        Self::require_spliceable(&new_node)?;
        let ty = parent.expr_type();
        let slot = parent.child_mut().ok_or_else(|| Self::missing_child(ty))?;
        Self::splice_above(slot, new_node)?;
        debug!(edit = "insert", at = %Self::describe(parent), "spliced node");
        Ok(parent)
    }

    /// Removes the unary child of `parent`, promoting the grandchild.
    pub fn delete_node(parent: &mut LogicalNode) -> Result<&mut LogicalNode, PlannerError> {
        Self::require_unary_parent(parent)?;
        let child = Self::attached_child(parent)?;
        if !child.is_unary() || child.is_detached() {
            return Err(PlannerError::InvalidPlanShape(format!(
                "cannot delete the {} below {}",
                child.expr_type(),
                parent.expr_type()
            )));
        }

        let ty = parent.expr_type();
        let mut removed = parent.take_child().ok_or_else(|| Self::missing_child(ty))?;
        let grandchild = removed.take_child().ok_or_else(|| Self::missing_child(removed.expr_type()))?;
        parent.set_child(grandchild)?;
        debug!(edit = "delete", removed = %removed.expr_type(), at = %Self::describe(parent), "removed node");
        Ok(parent)
    }

    /// Replaces the first node of type `ty` (in post-order of its parents)
    /// with `new_node`. When the replaced node is unary its child is moved
    /// under `new_node`, which must then be a detached unary node. Schemas
    /// are left as they are; refresh them afterwards. Returns the parent.
    pub fn replace_node(plan: &mut LogicalNode, new_node: LogicalNode, ty: ExprType) -> Result<&mut LogicalNode, PlannerError> {
        if new_node.is_binary() {
            return Err(PlannerError::PreconditionViolation("a join cannot replace a single node".into()));
        }
        let path = NodePath::find_post_order(plan, &|n: &LogicalNode| Self::has_child_of_type(n, ty))
            .ok_or_else(|| PlannerError::InvalidPlanShape(format!("no {} node below another node", ty)))?;
        let parent = path
            .walk_mut(plan)
            .ok_or_else(|| PlannerError::InvalidPlanShape(format!("no {} node below another node", ty)))?;
        Self::require_unary_parent(parent)?;

        let matched = Self::attached_child(parent)?;
        let adopts = matched.is_unary();
        if adopts && !(new_node.is_unary() && new_node.is_detached()) {
            return Err(PlannerError::PreconditionViolation(format!(
                "replacement for {} must be a detached single-input node",
                ty
            )));
        }
        if !adopts && new_node.is_detached() {
            return Err(PlannerError::InvalidPlanShape(format!(
                "replacement for {} would be left without a child",
                ty
            )));
        }

        let mut new_node = new_node;
        let mut matched = parent.take_child().ok_or_else(|| Self::missing_child(ty))?;
        if adopts {
            let grandchild = matched.take_child().ok_or_else(|| Self::missing_child(ty))?;
            new_node.set_child(grandchild)?;
        }
        let new_ty = new_node.expr_type();
        parent.set_child(new_node)?;
        debug!(edit = "replace", replaced = %ty, with = %new_ty, at = %parent.expr_type(), "replaced node");
        Ok(parent)
    }

    /// Splices `node` above the outer child of a join. Returns the join.
    pub fn insert_outer_node(parent: &mut LogicalNode, node: LogicalNode) -> Result<&mut LogicalNode, PlannerError> {
        Self::require_binary_parent(parent)?;
        Self::require_spliceable(&node)?;
        let slot = parent.outer_mut().ok_or_else(|| Self::missing_child(ExprType::Join))?;
        Self::splice_above(slot, node)?;
        debug!(edit = "insert", side = "outer", "spliced node");
        Ok(parent)
    }

    /// Splices `node` above the inner child of a join. Returns the join.
    pub fn insert_inner_node(parent: &mut LogicalNode, node: LogicalNode) -> Result<&mut LogicalNode, PlannerError> {
        Self::require_binary_parent(parent)?;
        Self::require_spliceable(&node)?;
        let slot = parent.inner_mut().ok_or_else(|| Self::missing_child(ExprType::Join))?;
        Self::splice_above(slot, node)?;
        debug!(edit = "insert", side = "inner", "spliced node");
        Ok(parent)
    }

    /// `insert_outer_node` and `insert_inner_node` in one step; nothing is
    /// changed unless both nodes can be spliced.
    pub fn insert_pair(parent: &mut LogicalNode, left: LogicalNode, right: LogicalNode) -> Result<&mut LogicalNode, PlannerError> {
        Self::require_binary_parent(parent)?;
        Self::require_spliceable(&left)?;
        Self::require_spliceable(&right)?;
        Self::insert_outer_node(parent, left)?;
        Self::insert_inner_node(parent, right)
    }

    /// Puts `node` where `slot` is and re-attaches the old occupant below it.
    fn splice_above(slot: &mut LogicalNode, mut node: LogicalNode) -> Result<(), PlannerError> {
        let schema = slot.out_schema().clone();
        node.set_in_schema(schema.clone());
        node.set_out_schema(schema);
        let previous = std::mem::replace(slot, node);
        slot.set_child(previous)?;
        Ok(())
    }

    pub(crate) fn has_child_of_type(node: &LogicalNode, ty: ExprType) -> bool {
        node.children().iter().any(|c| c.expr_type() == ty)
    }

    fn require_unary_parent(parent: &LogicalNode) -> Result<(), PlannerError> {
        if parent.is_unary() {
            return Ok(());
        }
        Err(PlannerError::PreconditionViolation(format!("{} is not a single-input node", parent.expr_type())))
    }

    fn require_binary_parent(parent: &LogicalNode) -> Result<(), PlannerError> {
        if parent.is_binary() {
            return Ok(());
        }
        Err(PlannerError::PreconditionViolation(format!("{} is not a join", parent.expr_type())))
    }

    fn require_spliceable(node: &LogicalNode) -> Result<(), PlannerError> {
        if node.is_unary() && node.is_detached() {
            return Ok(());
        }
        Err(PlannerError::PreconditionViolation(format!(
            "{} cannot be spliced, only detached single-input nodes can",
            node.expr_type()
        )))
    }

    fn missing_child(ty: ExprType) -> PlannerError {
        PlannerError::InvalidPlanShape(format!("{} node has no child", ty))
    }
}
