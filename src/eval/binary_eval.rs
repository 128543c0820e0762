use std::cmp::Ordering;

use crate::{
    catalog::{DataType, Schema},
    datum::{ArithOp, Datum, Tuple},
    eval::{BinaryOp, EvalError, EvalNode},
};

/// Two-operand expression: comparison, arithmetic or logical connective.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryEval {
    pub op: BinaryOp,
    pub left: Box<EvalNode>,
    pub right: Box<EvalNode>,
}

impl BinaryEval {
    pub fn new(op: BinaryOp, left: EvalNode, right: EvalNode) -> Self {
        Self { op, left: Box::new(left), right: Box::new(right) }
    }

    pub fn value_type(&self) -> DataType {
        if self.op.is_comparison() || self.op.is_logical() {
            return DataType::Boolean;
        }
        DataType::widen(self.left.value_type(), self.right.value_type()).unwrap_or(DataType::Null)
    }

    pub fn eval(&self, schema: &Schema, tuple: &Tuple) -> Result<Datum, EvalError> {
        let left = self.left.eval(schema, tuple)?;
        let right = self.right.eval(schema, tuple)?;

        match self.op {
            BinaryOp::And => Self::and(&left, &right),
            BinaryOp::Or => Self::or(&left, &right),
            BinaryOp::Equal => left.equals_to(&right),
            BinaryOp::NotEqual => Ok(match left.equals_to(&right)? {
                Datum::Bool(b) => Datum::Bool(!b),
                other => other,
            }),
            BinaryOp::LessThan => Self::compare(&left, &right, |o| o == Ordering::Less),
            BinaryOp::LessEqual => Self::compare(&left, &right, |o| o != Ordering::Greater),
            BinaryOp::GreaterThan => Self::compare(&left, &right, |o| o == Ordering::Greater),
            BinaryOp::GreaterEqual => Self::compare(&left, &right, |o| o != Ordering::Less),
            BinaryOp::Plus => left.arith(ArithOp::Plus, &right),
            BinaryOp::Minus => left.arith(ArithOp::Minus, &right),
            BinaryOp::Multiply => left.arith(ArithOp::Multiply, &right),
            BinaryOp::Divide => left.arith(ArithOp::Divide, &right),
            BinaryOp::Modular => left.arith(ArithOp::Modular, &right),
        }
    }

    fn compare(left: &Datum, right: &Datum, accept: impl Fn(Ordering) -> bool) -> Result<Datum, EvalError> {
        if left.is_null() || right.is_null() {
            return Ok(Datum::Null);
        }
        Ok(Datum::Bool(accept(left.compare_to(right)?)))
    }

    /// `None` stands for SQL unknown.
    fn truth(value: &Datum) -> Result<Option<bool>, EvalError> {
        if value.is_null() {
            return Ok(None);
        }
        value.as_bool().map(Some)
    }

    fn and(left: &Datum, right: &Datum) -> Result<Datum, EvalError> {
        Ok(match (Self::truth(left)?, Self::truth(right)?) {
            (Some(false), _) | (_, Some(false)) => Datum::Bool(false),
            (Some(true), Some(true)) => Datum::Bool(true),
            _ => Datum::Null,
        })
    }

    fn or(left: &Datum, right: &Datum) -> Result<Datum, EvalError> {
        Ok(match (Self::truth(left)?, Self::truth(right)?) {
            (Some(true), _) | (_, Some(true)) => Datum::Bool(true),
            (Some(false), Some(false)) => Datum::Bool(false),
            _ => Datum::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::{DataType, Schema},
        datum::{Datum, Tuple},
        eval::{BinaryOp, EvalError, EvalNode},
    };

    fn lit(d: Datum) -> EvalNode {
        EvalNode::constant(d)
    }

    fn run(op: BinaryOp, l: Datum, r: Datum) -> Result<Datum, EvalError> {
        EvalNode::binary(op, lit(l), lit(r)).eval(&Schema::new(), &Tuple::new(vec![]))
    }

    #[test]
    fn comparisons() {
        assert_eq!(run(BinaryOp::LessThan, Datum::Int(1), Datum::Long(2)).unwrap(), Datum::Bool(true));
        assert_eq!(run(BinaryOp::GreaterEqual, Datum::Double(2.0), Datum::Int(2)).unwrap(), Datum::Bool(true));
        assert_eq!(run(BinaryOp::NotEqual, Datum::Text("a".into()), Datum::Text("b".into())).unwrap(), Datum::Bool(true));
        assert_eq!(run(BinaryOp::Equal, Datum::Null, Datum::Int(1)).unwrap(), Datum::Null);
        assert_eq!(run(BinaryOp::LessThan, Datum::Int(1), Datum::Null).unwrap(), Datum::Null);
    }

    #[test]
    fn enum_comparison_is_not_implemented() {
        let err = run(BinaryOp::Equal, Datum::Enum(1), Datum::Enum(1)).unwrap_err();
        assert!(matches!(err, EvalError::NotImplemented(_)));
    }

    #[test]
    fn three_valued_logic() {
        let t = Datum::Bool(true);
        let f = Datum::Bool(false);
        assert_eq!(run(BinaryOp::And, Datum::Null, f.clone()).unwrap(), f);
        assert_eq!(run(BinaryOp::And, Datum::Null, t.clone()).unwrap(), Datum::Null);
        assert_eq!(run(BinaryOp::Or, Datum::Null, t.clone()).unwrap(), t);
        assert_eq!(run(BinaryOp::Or, Datum::Null, f.clone()).unwrap(), Datum::Null);
        assert_eq!(run(BinaryOp::Or, f.clone(), f.clone()).unwrap(), f);
    }

    #[test]
    fn arithmetic_widens() {
        assert_eq!(run(BinaryOp::Plus, Datum::Int(2), Datum::Long(3)).unwrap(), Datum::Long(5));
        assert_eq!(run(BinaryOp::Multiply, Datum::Int(2), Datum::Double(1.5)).unwrap(), Datum::Double(3.0));
        assert_eq!(run(BinaryOp::Divide, Datum::Int(1), Datum::Int(0)).unwrap_err(), EvalError::DivisionByZero);

        let e = EvalNode::binary(BinaryOp::Minus, lit(Datum::Short(1)), lit(Datum::Float(1.0)));
        assert_eq!(e.value_type(), DataType::Float);
        let e = EvalNode::binary(BinaryOp::Equal, lit(Datum::Int(1)), lit(Datum::Int(1)));
        assert_eq!(e.value_type(), DataType::Boolean);
    }
}
