use std::fmt;

use crate::{
    catalog::{Column, DataType, Schema},
    datum::{Datum, Tuple},
    eval::{BinaryEval, BinaryOp, ConstEval, EvalError, EvalType, FieldEval, FuncCallEval},
};

/// Callback invoked once per node by [`EvalNode::pre_order`] and
/// [`EvalNode::post_order`]. Closures taking `&EvalNode` work as visitors.
pub trait EvalNodeVisitor<'a> {
    fn visit(&mut self, node: &'a EvalNode);
}

impl<'a, F> EvalNodeVisitor<'a> for F
where
    F: FnMut(&'a EvalNode),
{
    fn visit(&mut self, node: &'a EvalNode) {
        self(node)
    }
}

/// Expression tree embedded in plan nodes (predicates, targets, join quals).
#[derive(Debug, Clone, PartialEq)]
pub enum EvalNode {
    Field(FieldEval),
    Const(ConstEval),
    Binary(BinaryEval),
    Function(FuncCallEval),
}

impl EvalNode {
    pub fn field(column: Column) -> Self {
        EvalNode::Field(FieldEval::new(column))
    }

    pub fn constant(value: Datum) -> Self {
        EvalNode::Const(ConstEval::new(value))
    }

    pub fn binary(op: BinaryOp, left: EvalNode, right: EvalNode) -> Self {
        EvalNode::Binary(BinaryEval::new(op, left, right))
    }

    pub fn and(left: EvalNode, right: EvalNode) -> Self {
        Self::binary(BinaryOp::And, left, right)
    }

    pub fn equal(left: EvalNode, right: EvalNode) -> Self {
        Self::binary(BinaryOp::Equal, left, right)
    }

    pub fn eval_type(&self) -> EvalType {
        match self {
            EvalNode::Field(_) => EvalType::Field,
            EvalNode::Const(_) => EvalType::Const,
            EvalNode::Binary(b) => EvalType::Binary(b.op),
            EvalNode::Function(_) => EvalType::Function,
        }
    }

    pub fn value_type(&self) -> DataType {
        match self {
            EvalNode::Field(f) => f.column.data_type,
            EvalNode::Const(c) => c.value.data_type(),
            EvalNode::Binary(b) => b.value_type(),
            EvalNode::Function(f) => f.desc.return_type,
        }
    }

    /// Short name used when an output column has to be named after the
    /// expression: the column name for fields, the function name for calls.
    pub fn name(&self) -> String {
        match self {
            EvalNode::Field(f) => f.column.qualified_name(),
            EvalNode::Const(_) => "const".to_string(),
            EvalNode::Binary(_) => "expr".to_string(),
            EvalNode::Function(f) => f.desc.name.clone(),
        }
    }

    /// Number of positional sub-expressions.
    pub fn arg_count(&self) -> usize {
        match self {
            EvalNode::Field(_) | EvalNode::Const(_) => 0,
            EvalNode::Binary(_) => 2,
            EvalNode::Function(f) => f.args.len(),
        }
    }

    pub fn expr(&self, idx: usize) -> Option<&EvalNode> {
        match self {
            EvalNode::Field(_) | EvalNode::Const(_) => None,
            EvalNode::Binary(b) => match idx {
                0 => Some(&b.left),
                1 => Some(&b.right),
                _ => None,
            },
            EvalNode::Function(f) => f.args.get(idx),
        }
    }

    pub fn expr_mut(&mut self, idx: usize) -> Option<&mut EvalNode> {
        match self {
            EvalNode::Field(_) | EvalNode::Const(_) => None,
            EvalNode::Binary(b) => match idx {
                0 => Some(&mut b.left),
                1 => Some(&mut b.right),
                _ => None,
            },
            EvalNode::Function(f) => f.args.get_mut(idx),
        }
    }

    pub fn left(&self) -> Option<&EvalNode> {
        match self {
            EvalNode::Binary(b) => Some(&b.left),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&EvalNode> {
        match self {
            EvalNode::Binary(b) => Some(&b.right),
            _ => None,
        }
    }

    pub fn eval(&self, schema: &Schema, tuple: &Tuple) -> Result<Datum, EvalError> {
        match self {
            EvalNode::Field(f) => f.eval(schema, tuple),
            EvalNode::Const(c) => Ok(c.value.clone()),
            EvalNode::Binary(b) => b.eval(schema, tuple),
            EvalNode::Function(f) => f.eval(schema, tuple),
        }
    }

    /// Node first, then sub-expressions left to right.
    pub fn pre_order<'a, V: EvalNodeVisitor<'a>>(&'a self, visitor: &mut V) {
        visitor.visit(self);
        for idx in 0..self.arg_count() {
            if let Some(child) = self.expr(idx) {
                child.pre_order(visitor);
            }
        }
    }

    /// Sub-expressions left to right, then the node.
    pub fn post_order<'a, V: EvalNodeVisitor<'a>>(&'a self, visitor: &mut V) {
        for idx in 0..self.arg_count() {
            if let Some(child) = self.expr(idx) {
                child.post_order(visitor);
            }
        }
        visitor.visit(self);
    }

    pub fn post_order_mut<F: FnMut(&mut EvalNode)>(&mut self, f: &mut F) {
        for idx in 0..self.arg_count() {
            if let Some(child) = self.expr_mut(idx) {
                child.post_order_mut(f);
            }
        }
        f(self);
    }
}

impl fmt::Display for EvalNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalNode::Field(field) => write!(f, "{}", field.column.qualified_name()),
            EvalNode::Const(c) => write!(f, "{:?}", c.value),
            EvalNode::Binary(b) => write!(f, "({} {} {})", b.left, b.op, b.right),
            EvalNode::Function(call) => {
                let args: Vec<String> = call.args.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", call.desc.name, args.join(","))
            }
        }
    }
}
