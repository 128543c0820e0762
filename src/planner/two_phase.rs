use tracing::{debug, warn};

use crate::{
    catalog::Column,
    eval::{EvalNode, EvalTreeUtil},
    planner::{
        PlannerConfig, PlannerError, PlannerUtil,
        logical::{ExprType, LogicalNode, StoreNode},
    },
};

/// Column substitution for one final-stage target: (target index, from, to).
type Rebind = (usize, Column, Column);

impl PlannerUtil {
    /// Splits a group-by into a partial stage (a copy of the node, now over
    /// the original input) and a final stage (the node itself, now over the
    /// partial stage). Aggregate calls of the final stage are rebound to the
    /// partial stage's output column at the same position.
    ///
    /// Every check runs before the tree is touched: on error `node` is left
    /// as it was.
    pub fn transform_groupby_to_2p(node: &mut LogicalNode) -> Result<&mut LogicalNode, PlannerError> {
        Self::check_two_phase(node, ExprType::GroupBy)?;
        let rebinds = Self::plan_rebinds(node)?;
        Self::split_two_phase(node)?;
        Self::apply_rebinds(node, rebinds);
        Ok(node)
    }

    /// Splits a sort into a partial and a final stage.
    pub fn transform_sort_to_2p(node: &mut LogicalNode) -> Result<&mut LogicalNode, PlannerError> {
        Self::check_two_phase(node, ExprType::Sort)?;
        Self::split_two_phase(node)?;
        Ok(node)
    }

    /// Like [`PlannerUtil::transform_groupby_to_2p`], with a store into
    /// `table_id` between the two stages.
    pub fn transform_groupby_to_2p_with_store<'a>(
        node: &'a mut LogicalNode,
        table_id: &str,
        config: &PlannerConfig,
    ) -> Result<&'a mut LogicalNode, PlannerError> {
        Self::check_two_phase(node, ExprType::GroupBy)?;
        let rebinds = if config.rebind_aggregates { Self::plan_rebinds(node)? } else { vec![] };
        Self::split_two_phase(node)?;
        Self::apply_rebinds(node, rebinds);
        Self::insert_store(node, table_id, config)
    }

    /// Like [`PlannerUtil::transform_sort_to_2p`], with a store into
    /// `table_id` between the two stages.
    pub fn transform_sort_to_2p_with_store<'a>(
        node: &'a mut LogicalNode,
        table_id: &str,
        config: &PlannerConfig,
    ) -> Result<&'a mut LogicalNode, PlannerError> {
        Self::check_two_phase(node, ExprType::Sort)?;
        Self::split_two_phase(node)?;
        Self::insert_store(node, table_id, config)
    }

    fn insert_store<'a>(
        node: &'a mut LogicalNode,
        table_id: &str,
        config: &PlannerConfig,
    ) -> Result<&'a mut LogicalNode, PlannerError> {
        Self::insert_node(node, StoreNode::new(table_id, config.local_store).into())?;
        debug!(table_id, local = config.local_store, "stored partial stage");
        Ok(node)
    }

    fn check_two_phase(node: &LogicalNode, expected: ExprType) -> Result<(), PlannerError> {
        if node.expr_type() != expected {
            return Err(PlannerError::PreconditionViolation(format!(
                "expected a {} node, got {}",
                expected,
                node.expr_type()
            )));
        }
        Self::attached_child(node)?;
        Ok(())
    }

    fn split_two_phase(node: &mut LogicalNode) -> Result<(), PlannerError> {
        let ty = node.expr_type();
        let input = node.take_child().ok_or_else(|| Self::no_input(ty))?;

        let mut partial = node.clone_detached();
        partial.set_child(input)?;
        let schema = partial.out_schema().clone();
        node.set_child(partial)?;
        node.set_in_schema(schema.clone());
        node.set_out_schema(schema);

        debug!(node = %ty, "split into partial and final stages");
        Ok(())
    }

    /// Works out, without changing anything, how each aggregate call of the
    /// final group-by is rebound to the partial output column at its own
    /// position. The partial stage is a copy of `node`, so its output schema
    /// is `node`'s current output schema.
    fn plan_rebinds(node: &LogicalNode) -> Result<Vec<Rebind>, PlannerError> {
        let LogicalNode::GroupBy(group_by) = node else {
            return Err(PlannerError::PreconditionViolation(format!("{} has no aggregates", node.expr_type())));
        };
        let partial = node.out_schema();
        if partial.len() < group_by.targets.len() {
            return Err(PlannerError::InvalidPlanShape(format!(
                "partial stage yields {} columns for {} targets",
                partial.len(),
                group_by.targets.len()
            )));
        }

        let mut rebinds = vec![];
        for (idx, target) in group_by.targets.iter().enumerate() {
            if !matches!(target.eval, EvalNode::Function(_)) {
                continue;
            }
            let refs = EvalTreeUtil::find_distinct_ref_columns(&target.eval);
            match refs.len() {
                0 => warn!(expr = %target.eval, "aggregate has no column argument, left unbound"),
                1 => {
                    let to = partial.column(idx).cloned().ok_or_else(|| Self::no_input(ExprType::GroupBy))?;
                    rebinds.push((idx, refs[0].clone(), to));
                }
                n => {
                    return Err(PlannerError::InvalidPlanShape(format!(
                        "aggregate {} reads {} columns, cannot rebind to one partial column",
                        target.eval, n
                    )));
                }
            }
        }
        Ok(rebinds)
    }

    fn apply_rebinds(node: &mut LogicalNode, rebinds: Vec<Rebind>) {
        if let LogicalNode::GroupBy(group_by) = node {
            for (idx, from, to) in rebinds {
                if let Some(target) = group_by.targets.get_mut(idx) {
                    EvalTreeUtil::change_column_ref(&mut target.eval, &from, &to);
                }
            }
        }
    }

    fn no_input(ty: ExprType) -> PlannerError {
        PlannerError::InvalidPlanShape(format!("{} node has no input", ty))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::{Column, DataType},
        eval::{EvalNode, EvalTreeUtil, FuncCallEval},
        planner::{
            _tests::fixtures,
            PlannerConfig, PlannerError, PlannerUtil, Target,
            logical::{ExprType, GroupByNode, LogicalNode},
        },
    };

    fn targets(node: &LogicalNode) -> &[Target] {
        match node {
            LogicalNode::GroupBy(g) => &g.targets,
            _ => &[],
        }
    }

    #[test]
    fn groupby_split_rebinds_aggregates() {
        let mut plan = fixtures::group_plan();
        let original = plan.clone();
        PlannerUtil::transform_groupby_to_2p(&mut plan).unwrap();
        assert_eq!(PlannerUtil::find_all_nodes(&plan, ExprType::GroupBy).len(), 2);

        let partial = plan.child().unwrap();
        assert_eq!(partial.expr_type(), ExprType::GroupBy);
        assert_eq!(partial.child(), original.child());
        assert_eq!(targets(partial), targets(&original));

        assert_eq!(plan.in_schema(), partial.out_schema());
        assert_eq!(plan.out_schema(), partial.out_schema());

        let t = targets(&plan);
        assert_eq!(t[0], targets(&original)[0]);
        let sum_refs = EvalTreeUtil::find_all_column_refs(&t[1].eval);
        assert_eq!(sum_refs, vec![Column::bare("sum_1", DataType::Double)]);
        let count_refs = EvalTreeUtil::find_all_column_refs(&t[2].eval);
        assert_eq!(count_refs, vec![Column::bare("count_2", DataType::Long)]);

        // final output names still line up with the partial stage
        PlannerUtil::refresh_schema(&mut plan).unwrap();
        assert_eq!(plan.out_schema(), plan.child().unwrap().out_schema());
    }

    #[test]
    fn constant_only_aggregate_is_left_alone() {
        let catalog = fixtures::catalog();
        let count_all: EvalNode = FuncCallEval::bind(&catalog, "count", vec![]).unwrap().into();
        let mut plan: LogicalNode = GroupByNode::new(vec![], vec![Target::new(count_all.clone())])
            .with_child(fixtures::orders_scan())
            .into();
        PlannerUtil::refresh_schema(&mut plan).unwrap();
        PlannerUtil::transform_groupby_to_2p(&mut plan).unwrap();
        assert_eq!(targets(&plan)[0].eval, count_all);
    }

    #[test]
    fn multi_column_aggregate_is_rejected() {
        let catalog = fixtures::catalog();
        let sum_of_sum: EvalNode = FuncCallEval::bind(
            &catalog,
            "sum",
            vec![EvalNode::binary(
                crate::eval::BinaryOp::Plus,
                EvalNode::field(Column::parse("orders.amount", DataType::Double)),
                EvalNode::field(Column::parse("orders.id", DataType::Int)),
            )],
        )
        .unwrap()
        .into();
        let mut plan: LogicalNode = GroupByNode::new(vec![], vec![Target::new(sum_of_sum)])
            .with_child(fixtures::orders_scan())
            .into();
        PlannerUtil::refresh_schema(&mut plan).unwrap();
        let before = plan.clone();

        let err = PlannerUtil::transform_groupby_to_2p(&mut plan).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidPlanShape(_)));
        assert_eq!(plan, before);
        assert_eq!(PlannerUtil::find_all_nodes(&plan, ExprType::GroupBy).len(), 1);
    }

    #[test]
    fn wrong_node_kind_is_a_precondition_violation() {
        let mut plan = fixtures::join_plan();
        let err = PlannerUtil::transform_groupby_to_2p(&mut plan).unwrap_err();
        assert!(matches!(err, PlannerError::PreconditionViolation(_)));
        assert_eq!(plan, fixtures::join_plan());
        assert!(PlannerUtil::transform_sort_to_2p(&mut plan).is_err());
    }

    #[test]
    fn sort_split_with_store() {
        let mut plan = fixtures::sorted_adults_plan();
        let original = plan.clone();
        PlannerUtil::transform_sort_to_2p_with_store(&mut plan, "sort_tmp", &PlannerConfig::default()).unwrap();

        let mut shape = vec![];
        plan.pre_order(&mut |n: &LogicalNode| shape.push(n.expr_type()));
        assert_eq!(shape, vec![ExprType::Sort, ExprType::Store, ExprType::Sort, ExprType::Scan]);

        match plan.child().unwrap() {
            LogicalNode::Store(store) => {
                assert_eq!(store.table_id, "sort_tmp");
                assert!(store.local);
            }
            other => panic!("expected a store, got {}", other.expr_type()),
        }
        assert_eq!(plan.out_schema(), original.out_schema());
    }

    #[test]
    fn groupby_with_remote_store_and_no_rebinding() {
        let mut plan = fixtures::group_plan();
        let original = plan.clone();
        let cfg = PlannerConfig::from(false, false);
        PlannerUtil::transform_groupby_to_2p_with_store(&mut plan, "gb_tmp", &cfg).unwrap();

        assert_eq!(targets(&plan), targets(&original));
        match plan.child().unwrap() {
            LogicalNode::Store(store) => assert!(!store.local),
            other => panic!("expected a store, got {}", other.expr_type()),
        }
        assert_eq!(plan.child().and_then(|s| s.child()).map(|p| p.expr_type()), Some(ExprType::GroupBy));
    }
}
