use indexmap::IndexSet;

use crate::{
    catalog::Column,
    eval::{EvalNode, EvalTreeUtil},
    planner::{PlannerUtil, logical::LogicalNode},
};

impl PlannerUtil {
    /// Every column referenced anywhere in `plan`: targets, predicates,
    /// grouping and sort keys, join qualifiers. Post-order, duplicates
    /// collapsed.
    pub fn collect_column_refs(plan: &LogicalNode) -> IndexSet<Column> {
        let mut collected = IndexSet::new();
        plan.post_order(&mut |node: &LogicalNode| Self::node_column_refs(node, &mut collected));
        collected
    }

    fn node_column_refs(node: &LogicalNode, collected: &mut IndexSet<Column>) {
        let mut add = |expr: &EvalNode| collected.extend(EvalTreeUtil::find_distinct_ref_columns(expr));
        match node {
            LogicalNode::Projection(p) => p.targets.iter().for_each(|t| add(&t.eval)),
            LogicalNode::Selection(s) => add(&s.qual),
            LogicalNode::GroupBy(g) => {
                g.targets.iter().for_each(|t| add(&t.eval));
                if let Some(having) = &g.having {
                    add(having);
                }
                collected.extend(g.grouping_columns.iter().cloned());
            }
            LogicalNode::Sort(s) => collected.extend(s.sort_keys.iter().map(|k| k.column.clone())),
            LogicalNode::Join(j) => j.qual.iter().for_each(&mut add),
            LogicalNode::Scan(s) => s.qual.iter().for_each(&mut add),
            LogicalNode::Store(_) => {}
        }
    }
}
