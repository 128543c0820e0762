use tracing::error;

use crate::{
    catalog::{Column, Schema},
    eval::{EvalNode, EvalNodeVisitor, EvalTreeUtil},
    planner::{PlannerError, PlannerUtil, SortSpec, TupleComparator},
};

/// Collects one (outer, inner) column pair per comparison in a join
/// qualifier. Each side of a comparison must reference exactly one column.
/// The first failure is kept and stops further pairing.
struct JoinKeyPairFinder<'s> {
    outer: &'s Schema,
    inner: &'s Schema,
    pairs: Vec<(Column, Column)>,
    failure: Option<PlannerError>,
}

impl<'a, 's> EvalNodeVisitor<'a> for JoinKeyPairFinder<'s> {
    fn visit(&mut self, node: &'a EvalNode) {
        if self.failure.is_some() || !EvalTreeUtil::is_comparison_operator(node) {
            return;
        }

        let mut pair: [Option<Column>; 2] = [None, None];
        for side in [node.left(), node.right()].into_iter().flatten() {
            let column = match EvalTreeUtil::find_all_column_refs(side).as_slice() {
                [column] => column.clone(),
                refs => {
                    error!(qual = %node, columns = refs.len(), "join key side must reference exactly one column");
                    self.failure = Some(PlannerError::WrongJoinKey(node.to_string()));
                    return;
                }
            };
            let name = column.qualified_name();
            if self.outer.contains(&name) {
                pair[0] = Some(column.clone());
            }
            if self.inner.contains(&name) {
                pair[1] = Some(column);
            }
        }

        match pair {
            [Some(outer), Some(inner)] => self.pairs.push((outer, inner)),
            _ => {
                error!(qual = %node, "comparison does not pair an outer column with an inner one");
                self.failure = Some(PlannerError::WrongJoinKey(node.to_string()));
            }
        }
    }
}

impl PlannerUtil {
    /// Whether `qual` compares a column of one table with a column of
    /// another. Both columns must carry different qualifiers, so a
    /// self-join on a single alias never qualifies.
    pub fn is_join_qual(qual: &EvalNode) -> bool {
        if !EvalTreeUtil::is_comparison_operator(qual) {
            return false;
        }
        let (Some(left), Some(right)) = (qual.left(), qual.right()) else {
            return false;
        };
        let left = EvalTreeUtil::find_all_column_refs(left);
        let right = EvalTreeUtil::find_all_column_refs(right);
        match (left.as_slice(), right.as_slice()) {
            ([l], [r]) => l.qualifier != r.qualifier,
            _ => false,
        }
    }

    /// `(outer, inner)` key columns of every comparison in `qual`, in
    /// pre-order. Each side of a comparison must reference exactly one
    /// column, one of `outer` and the other of `inner`.
    pub fn get_join_key_pairs(qual: &EvalNode, outer: &Schema, inner: &Schema) -> Result<Vec<(Column, Column)>, PlannerError> {
        let mut finder = JoinKeyPairFinder { outer, inner, pairs: vec![], failure: None };
        qual.pre_order(&mut finder);
        match finder.failure {
            Some(err) => Err(err),
            None => Ok(finder.pairs),
        }
    }

    /// Ascending sort keys for both inputs of a merge join.
    pub fn get_sort_keys_from_join_qual(
        qual: &EvalNode,
        outer: &Schema,
        inner: &Schema,
    ) -> Result<(Vec<SortSpec>, Vec<SortSpec>), PlannerError> {
        Ok(Self::get_join_key_pairs(qual, outer, inner)?
            .into_iter()
            .map(|(o, i)| (SortSpec::new(o), SortSpec::new(i)))
            .unzip())
    }

    pub fn get_comparators_from_join_qual(
        qual: &EvalNode,
        outer: &Schema,
        inner: &Schema,
    ) -> Result<(TupleComparator, TupleComparator), PlannerError> {
        let (outer_keys, inner_keys) = Self::get_sort_keys_from_join_qual(qual, outer, inner)?;
        Ok((TupleComparator::new(outer, &outer_keys)?, TupleComparator::new(inner, &inner_keys)?))
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use crate::{
        catalog::{Column, DataType, Schema},
        datum::{Datum, Tuple},
        eval::{BinaryOp, EvalNode},
        planner::{_tests::fixtures, PlannerError, PlannerUtil},
    };

    fn f(name: &str) -> EvalNode {
        EvalNode::field(Column::parse(name, DataType::Int))
    }

    fn schema(names: &[&str]) -> Schema {
        Schema::from_columns(names.iter().map(|n| Column::parse(n, DataType::Int)).collect()).unwrap()
    }

    #[test]
    fn join_qualifier_detection() {
        assert!(PlannerUtil::is_join_qual(&EvalNode::equal(f("a.x"), f("b.y"))));
        assert!(PlannerUtil::is_join_qual(&EvalNode::binary(BinaryOp::LessThan, f("a.x"), f("b.y"))));
        // same alias on both sides, even for different columns
        assert!(!PlannerUtil::is_join_qual(&EvalNode::equal(f("a.x"), f("a.y"))));
        assert!(!PlannerUtil::is_join_qual(&EvalNode::equal(f("a.x"), EvalNode::constant(Datum::Int(1)))));
        assert!(!PlannerUtil::is_join_qual(&EvalNode::binary(BinaryOp::Plus, f("a.x"), f("b.y"))));
        let two_left = EvalNode::equal(EvalNode::binary(BinaryOp::Plus, f("a.x"), f("a.z")), f("b.y"));
        assert!(!PlannerUtil::is_join_qual(&two_left));
        assert!(!PlannerUtil::is_join_qual(&EvalNode::and(
            EvalNode::equal(f("a.x"), f("b.y")),
            EvalNode::equal(f("a.z"), f("b.w"))
        )));
    }

    #[test]
    fn key_pairs_in_traversal_order() {
        let outer = schema(&["a.x", "a.z"]);
        let inner = schema(&["b.y", "b.w"]);
        // b.y = a.x AND a.z = b.w
        let qual = EvalNode::and(EvalNode::equal(f("b.y"), f("a.x")), EvalNode::equal(f("a.z"), f("b.w")));
        let pairs = PlannerUtil::get_join_key_pairs(&qual, &outer, &inner).unwrap();
        let names: Vec<(String, String)> =
            pairs.iter().map(|(o, i)| (o.qualified_name(), i.qualified_name())).collect();
        assert_eq!(
            names,
            vec![("a.x".to_string(), "b.y".to_string()), ("a.z".to_string(), "b.w".to_string())]
        );
    }

    #[test]
    fn unpaired_comparison_is_a_wrong_join_key() {
        let outer = schema(&["a.x", "a.z"]);
        let inner = schema(&["b.y"]);
        let qual = EvalNode::equal(f("a.x"), f("a.z"));
        let err = PlannerUtil::get_join_key_pairs(&qual, &outer, &inner).unwrap_err();
        assert!(matches!(err, PlannerError::WrongJoinKey(_)));

        let qual = EvalNode::equal(f("a.x"), EvalNode::constant(Datum::Int(3)));
        assert!(PlannerUtil::get_join_key_pairs(&qual, &outer, &inner).is_err());
    }

    #[test]
    fn side_with_several_columns_is_a_wrong_join_key() {
        let outer = schema(&["a.x", "a.y"]);
        let inner = schema(&["b.z"]);
        // a.x + a.y = b.z
        let qual = EvalNode::equal(EvalNode::binary(BinaryOp::Plus, f("a.x"), f("a.y")), f("b.z"));
        let err = PlannerUtil::get_join_key_pairs(&qual, &outer, &inner).unwrap_err();
        assert!(matches!(err, PlannerError::WrongJoinKey(_)));

        // the same column twice is still two references
        let qual = EvalNode::equal(EvalNode::binary(BinaryOp::Plus, f("a.x"), f("a.x")), f("b.z"));
        assert!(PlannerUtil::get_join_key_pairs(&qual, &outer, &inner).is_err());
    }

    #[test]
    fn merge_join_keys_and_comparators() {
        let plan = fixtures::join_plan();
        let join = plan.child().and_then(|s| s.child()).unwrap();
        let (outer, inner) = (join.outer().unwrap().out_schema(), join.inner().unwrap().out_schema());
        let qual = fixtures::join_qual();

        let (outer_keys, inner_keys) = PlannerUtil::get_sort_keys_from_join_qual(&qual, outer, inner).unwrap();
        assert_eq!(outer_keys[0].column.qualified_name(), "people.id");
        assert_eq!(inner_keys[0].column.qualified_name(), "orders.person_id");
        assert!(outer_keys[0].ascending && !outer_keys[0].null_first);

        let (oc, ic) = PlannerUtil::get_comparators_from_join_qual(&qual, outer, inner).unwrap();
        let p1 = Tuple::new(vec![Datum::Int(1), Datum::Text("ann".into()), Datum::Int(30)]);
        let p2 = Tuple::new(vec![Datum::Int(2), Datum::Text("bob".into()), Datum::Int(17)]);
        assert_eq!(oc.compare(&p1, &p2).unwrap(), Ordering::Less);

        let o1 = Tuple::new(vec![Datum::Int(10), Datum::Int(2), Datum::Double(5.0)]);
        let o2 = Tuple::new(vec![Datum::Int(11), Datum::Int(1), Datum::Double(9.0)]);
        assert_eq!(ic.compare(&o1, &o2).unwrap(), Ordering::Greater);
    }
}
