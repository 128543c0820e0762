use crate::{
    catalog::Schema,
    planner::{SortSpec, Target, logical::LogicalNode},
};

/// Planner toolkit over logical plans.
///
/// Every rewrite works in place on the tree it is handed; clone the tree
/// first to keep the original. The operations are grouped by concern in
/// `schema_refresh`, `tree_edit`, `node_search`, `column_refs`, `two_phase`
/// and `join_qual`.
pub struct PlannerUtil;

impl PlannerUtil {
    pub(crate) fn describe(node: &LogicalNode) -> String {
        match node.child() {
            Some(child) => format!("{} over {}", node.expr_type(), child.expr_type()),
            None => node.expr_type().to_string(),
        }
    }
}

impl PlannerUtil {
    /// One plain column target per schema column.
    pub fn schema_to_targets(schema: &Schema) -> Vec<Target> {
        schema.columns().iter().cloned().map(Target::field).collect()
    }

    /// One ascending, nulls-last key per schema column.
    pub fn schema_to_sort_specs(schema: &Schema) -> Vec<SortSpec> {
        schema.columns().iter().cloned().map(SortSpec::new).collect()
    }
}
