use indexmap::IndexSet;

use crate::{
    catalog::Column,
    eval::{EvalNode, EvalType},
};

/// Read-only queries and column rewrites over expression trees.
pub struct EvalTreeUtil;

impl EvalTreeUtil {
    /// Columns referenced by `expr`, without duplicates, in first-seen
    /// pre-order position.
    pub fn find_distinct_ref_columns(expr: &EvalNode) -> IndexSet<Column> {
        let mut columns = IndexSet::new();
        expr.pre_order(&mut |node: &EvalNode| {
            if let EvalNode::Field(f) = node {
                columns.insert(f.column.clone());
            }
        });
        columns
    }

    /// Every column reference in pre-order, duplicates kept.
    pub fn find_all_column_refs(expr: &EvalNode) -> Vec<Column> {
        let mut columns = Vec::new();
        expr.pre_order(&mut |node: &EvalNode| {
            if let EvalNode::Field(f) = node {
                columns.push(f.column.clone());
            }
        });
        columns
    }

    /// Rewrites every reference to `from` into a reference to `to`.
    /// Returns how many references changed.
    pub fn change_column_ref(expr: &mut EvalNode, from: &Column, to: &Column) -> usize {
        let mut changed = 0;
        expr.post_order_mut(&mut |node: &mut EvalNode| {
            if let EvalNode::Field(f) = node {
                if &f.column == from {
                    f.replace_column(to.clone());
                    changed += 1;
                }
            }
        });
        changed
    }

    pub fn is_comparison_operator(expr: &EvalNode) -> bool {
        expr.eval_type().is_comparison()
    }

    pub fn is_logical_operator(expr: &EvalNode) -> bool {
        expr.eval_type().is_logical()
    }

    /// True when `expr` contains no aggregate call.
    pub fn is_scalar(expr: &EvalNode) -> bool {
        let mut scalar = true;
        expr.pre_order(&mut |node: &EvalNode| {
            if matches!(node, EvalNode::Function(f) if f.is_aggregation()) {
                scalar = false;
            }
        });
        scalar
    }

    pub fn is_field(expr: &EvalNode) -> bool {
        expr.eval_type() == EvalType::Field
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::{Column, DataType, MemoryCatalog},
        datum::Datum,
        eval::{BinaryOp, EvalNode, EvalTreeUtil, FuncCallEval},
    };

    fn c(name: &str) -> Column {
        Column::parse(name, DataType::Int)
    }

    fn f(name: &str) -> EvalNode {
        EvalNode::field(c(name))
    }

    // (t.a + t.b) * t.a > 10
    fn sample() -> EvalNode {
        EvalNode::binary(
            BinaryOp::GreaterThan,
            EvalNode::binary(
                BinaryOp::Multiply,
                EvalNode::binary(BinaryOp::Plus, f("t.a"), f("t.b")),
                f("t.a"),
            ),
            EvalNode::constant(Datum::Int(10)),
        )
    }

    #[test]
    fn collects_column_refs() {
        let e = sample();
        let distinct: Vec<Column> = EvalTreeUtil::find_distinct_ref_columns(&e).into_iter().collect();
        assert_eq!(distinct, vec![c("t.a"), c("t.b")]);
        assert_eq!(EvalTreeUtil::find_all_column_refs(&e), vec![c("t.a"), c("t.b"), c("t.a")]);
        assert!(EvalTreeUtil::find_all_column_refs(&EvalNode::constant(Datum::Int(1))).is_empty());
    }

    #[test]
    fn rewrites_every_matching_reference() {
        let mut e = sample();
        let n = EvalTreeUtil::change_column_ref(&mut e, &c("t.a"), &c("p.x"));
        assert_eq!(n, 2);
        assert_eq!(EvalTreeUtil::find_all_column_refs(&e), vec![c("p.x"), c("t.b"), c("p.x")]);
        assert_eq!(EvalTreeUtil::change_column_ref(&mut e, &c("t.a"), &c("p.x")), 0);
    }

    #[test]
    fn operator_classification() {
        assert!(EvalTreeUtil::is_comparison_operator(&sample()));
        assert!(!EvalTreeUtil::is_logical_operator(&sample()));
        let and = EvalNode::and(sample(), sample());
        assert!(EvalTreeUtil::is_logical_operator(&and));
        assert!(!EvalTreeUtil::is_comparison_operator(&f("t.a")));
        assert!(EvalTreeUtil::is_field(&f("t.a")));
    }

    #[test]
    fn aggregate_detection() {
        let catalog = MemoryCatalog::new();
        let sum: EvalNode = FuncCallEval::bind(&catalog, "sum", vec![f("t.a")]).unwrap().into();
        assert!(!EvalTreeUtil::is_scalar(&sum));
        assert!(EvalTreeUtil::is_scalar(&sample()));
    }
}
