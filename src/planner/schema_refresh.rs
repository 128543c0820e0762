use tracing::debug;

use crate::{
    catalog::Schema,
    planner::{PlannerError, PlannerUtil, Target, logical::LogicalNode},
};

impl PlannerUtil {
    /// Recomputes the input and output schemas of every node in `plan`.
    ///
    /// Output schemas are derived bottom-up from each node's payload and its
    /// children's fresh output schemas; input schemas are then copied down
    /// from the children. Running it twice changes nothing.
    pub fn refresh_schema(plan: &mut LogicalNode) -> Result<&mut LogicalNode, PlannerError> {
        plan.post_order_mut(&mut |node: &mut LogicalNode| {
            let schema = Self::derive_out_schema(node)?;
            node.set_out_schema(schema);
            Ok(())
        })?;
        plan.pre_order_mut(&mut |node: &mut LogicalNode| {
            let schema = Self::derive_in_schema(node)?;
            node.set_in_schema(schema);
            Ok(())
        })?;

        debug!(root = %plan.expr_type(), nodes = plan.size(), columns = plan.out_schema().len(), "refreshed plan schemas");
        Ok(plan)
    }

    /// Output schema of `node` given its children's current output schemas.
    pub fn derive_out_schema(node: &LogicalNode) -> Result<Schema, PlannerError> {
        Ok(match node {
            LogicalNode::Scan(scan) => scan.table.schema.qualify(&scan.table.table_id)?,
            LogicalNode::Projection(p) => Self::targets_to_schema(&p.targets)?,
            LogicalNode::GroupBy(g) => Self::targets_to_schema(&g.targets)?,
            LogicalNode::Join(j) => j.outer.out_schema().concat(j.inner.out_schema())?,
            other => Self::attached_child(other)?.out_schema().clone(),
        })
    }

    fn derive_in_schema(node: &LogicalNode) -> Result<Schema, PlannerError> {
        Ok(match node {
            LogicalNode::Scan(scan) => scan.table.schema.clone(),
            LogicalNode::Join(j) => j.outer.out_schema().concat(j.inner.out_schema())?,
            other => Self::attached_child(other)?.out_schema().clone(),
        })
    }

    /// One column per target, named by [`Target::column_name`].
    pub fn targets_to_schema(targets: &[Target]) -> Result<Schema, PlannerError> {
        let mut schema = Schema::new();
        for (idx, target) in targets.iter().enumerate() {
            schema.add_column(target.to_column(idx))?;
        }
        Ok(schema)
    }

    pub(crate) fn attached_child(node: &LogicalNode) -> Result<&LogicalNode, PlannerError> {
        node.child()
            .ok_or_else(|| PlannerError::InvalidPlanShape(format!("{} node has no child", node.expr_type())))
    }
}
