use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{catalog::DataType, eval::EvalError};

/// Boxed scalar value consumed and produced by expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Datum {
    Null,
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bytes(Vec<u8>),
    Text(String),
    /// Enumerated constant; only its ordinal is kept.
    Enum(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modular,
}

impl Datum {
    pub fn data_type(&self) -> DataType {
        match self {
            Datum::Null => DataType::Null,
            Datum::Bool(_) => DataType::Boolean,
            Datum::Byte(_) => DataType::Byte,
            Datum::Short(_) => DataType::Short,
            Datum::Int(_) => DataType::Int,
            Datum::Long(_) => DataType::Long,
            Datum::Float(_) => DataType::Float,
            Datum::Double(_) => DataType::Double,
            Datum::Bytes(_) => DataType::Bytes,
            Datum::Text(_) => DataType::Text,
            Datum::Enum(_) => DataType::Enum,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    fn cast_error(&self, to: DataType) -> EvalError {
        EvalError::InvalidCast { from: self.data_type(), to }
    }

    fn integral(&self) -> Option<i64> {
        match self {
            Datum::Byte(v) => Some(*v as i64),
            Datum::Short(v) => Some(*v as i64),
            Datum::Int(v) => Some(*v as i64),
            Datum::Long(v) => Some(*v),
            _ => None,
        }
    }

    fn floating(&self) -> Option<f64> {
        match self {
            Datum::Float(v) => Some(*v as f64),
            Datum::Double(v) => Some(*v),
            other => other.integral().map(|v| v as f64),
        }
    }

    pub fn as_bool(&self) -> Result<bool, EvalError> {
        match self {
            Datum::Bool(b) => Ok(*b),
            Datum::Text(s) => match s.to_ascii_lowercase().as_str() {
                "t" | "true" => Ok(true),
                "f" | "false" => Ok(false),
                _ => Err(self.cast_error(DataType::Boolean)),
            },
            _ => Err(self.cast_error(DataType::Boolean)),
        }
    }

    pub fn as_long(&self) -> Result<i64, EvalError> {
        match self {
            Datum::Float(v) => Ok(*v as i64),
            Datum::Double(v) => Ok(*v as i64),
            Datum::Text(s) => s.trim().parse().map_err(|_| self.cast_error(DataType::Long)),
            other => other.integral().ok_or_else(|| self.cast_error(DataType::Long)),
        }
    }

    pub fn as_int(&self) -> Result<i32, EvalError> {
        i32::try_from(self.as_long().map_err(|_| self.cast_error(DataType::Int))?)
            .map_err(|_| self.cast_error(DataType::Int))
    }

    pub fn as_short(&self) -> Result<i16, EvalError> {
        i16::try_from(self.as_long().map_err(|_| self.cast_error(DataType::Short))?)
            .map_err(|_| self.cast_error(DataType::Short))
    }

    pub fn as_byte(&self) -> Result<i8, EvalError> {
        i8::try_from(self.as_long().map_err(|_| self.cast_error(DataType::Byte))?)
            .map_err(|_| self.cast_error(DataType::Byte))
    }

    pub fn as_double(&self) -> Result<f64, EvalError> {
        match self {
            Datum::Text(s) => s.trim().parse().map_err(|_| self.cast_error(DataType::Double)),
            other => other.floating().ok_or_else(|| self.cast_error(DataType::Double)),
        }
    }

    pub fn as_float(&self) -> Result<f32, EvalError> {
        self.as_double().map(|v| v as f32).map_err(|_| self.cast_error(DataType::Float))
    }

    pub fn as_bytes(&self) -> Result<Vec<u8>, EvalError> {
        match self {
            Datum::Bytes(b) => Ok(b.clone()),
            Datum::Text(s) => Ok(s.as_bytes().to_vec()),
            _ => Err(self.cast_error(DataType::Bytes)),
        }
    }

    pub fn as_chars(&self) -> Result<String, EvalError> {
        match self {
            Datum::Text(s) => Ok(s.clone()),
            Datum::Bool(b) => Ok(b.to_string()),
            Datum::Float(v) => Ok(v.to_string()),
            Datum::Double(v) => Ok(v.to_string()),
            Datum::Bytes(b) => Ok(String::from_utf8_lossy(b).into_owned()),
            other => other.integral().map(|v| v.to_string()).ok_or_else(|| self.cast_error(DataType::Text)),
        }
    }

    /// Three-way comparison.
    ///
    /// Null orders after every other value. Numbers compare across widths;
    /// other kinds only compare with themselves.
    pub fn compare_to(&self, other: &Datum) -> Result<Ordering, EvalError> {
        match (self, other) {
            (Datum::Enum(_), _) | (_, Datum::Enum(_)) => {
                Err(EvalError::NotImplemented("comparison of enum datums".into()))
            }
            (Datum::Null, Datum::Null) => Ok(Ordering::Equal),
            (Datum::Null, _) => Ok(Ordering::Greater),
            (_, Datum::Null) => Ok(Ordering::Less),
            (Datum::Bool(a), Datum::Bool(b)) => Ok(a.cmp(b)),
            (Datum::Text(a), Datum::Text(b)) => Ok(a.cmp(b)),
            (Datum::Bytes(a), Datum::Bytes(b)) => Ok(a.cmp(b)),
            (a, b) => match (a.integral(), b.integral()) {
                (Some(x), Some(y)) => Ok(x.cmp(&y)),
                _ => match (a.floating(), b.floating()) {
                    (Some(x), Some(y)) => Ok(OrderedFloat(x).cmp(&OrderedFloat(y))),
                    _ => Err(EvalError::TypeMismatch { left: a.data_type(), right: b.data_type() }),
                },
            },
        }
    }

    /// SQL equality: a Null operand yields Null, otherwise a Bool.
    pub fn equals_to(&self, other: &Datum) -> Result<Datum, EvalError> {
        if let (Datum::Enum(_), _) | (_, Datum::Enum(_)) = (self, other) {
            return Err(EvalError::NotImplemented("equality of enum datums".into()));
        }
        if self.is_null() || other.is_null() {
            return Ok(Datum::Null);
        }
        Ok(Datum::Bool(self.compare_to(other)? == Ordering::Equal))
    }

    pub fn arith(&self, op: ArithOp, other: &Datum) -> Result<Datum, EvalError> {
        if self.is_null() || other.is_null() {
            return Ok(Datum::Null);
        }
        let ty = DataType::widen(self.data_type(), other.data_type())
            .ok_or(EvalError::TypeMismatch { left: self.data_type(), right: other.data_type() })?;

        if ty.is_integral() {
            let (a, b) = (self.as_long()?, other.as_long()?);
            let value = match op {
                ArithOp::Plus => a.wrapping_add(b),
                ArithOp::Minus => a.wrapping_sub(b),
                ArithOp::Multiply => a.wrapping_mul(b),
                ArithOp::Divide | ArithOp::Modular if b == 0 => return Err(EvalError::DivisionByZero),
                ArithOp::Divide => a.wrapping_div(b),
                ArithOp::Modular => a.wrapping_rem(b),
            };
            return Datum::Long(value).cast_to(ty);
        }

        let (a, b) = (self.as_double()?, other.as_double()?);
        let value = match op {
            ArithOp::Plus => a + b,
            ArithOp::Minus => a - b,
            ArithOp::Multiply => a * b,
            ArithOp::Divide | ArithOp::Modular if b == 0.0 => return Err(EvalError::DivisionByZero),
            ArithOp::Divide => a / b,
            ArithOp::Modular => a % b,
        };
        Datum::Double(value).cast_to(ty)
    }

    pub fn cast_to(&self, ty: DataType) -> Result<Datum, EvalError> {
        if self.is_null() {
            return Ok(Datum::Null);
        }
        Ok(match ty {
            DataType::Boolean => Datum::Bool(self.as_bool()?),
            DataType::Byte => Datum::Byte(self.as_byte()?),
            DataType::Short => Datum::Short(self.as_short()?),
            DataType::Int => Datum::Int(self.as_int()?),
            DataType::Long => Datum::Long(self.as_long()?),
            DataType::Float => Datum::Float(self.as_float()?),
            DataType::Double => Datum::Double(self.as_double()?),
            DataType::Bytes => Datum::Bytes(self.as_bytes()?),
            DataType::Text => Datum::Text(self.as_chars()?),
            DataType::Enum | DataType::Null => return Err(self.cast_error(ty)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use crate::{catalog::DataType, datum::{ArithOp, Datum}, eval::EvalError};

    #[test]
    fn conversions_between_numeric_widths() {
        assert_eq!(Datum::Int(7).as_long().unwrap(), 7);
        assert_eq!(Datum::Long(300).as_short().unwrap(), 300);
        assert_eq!(Datum::Double(2.9).as_int().unwrap(), 2);
        assert_eq!(Datum::Short(3).as_double().unwrap(), 3.0);
        assert_eq!(Datum::Text("42".into()).as_int().unwrap(), 42);
    }

    #[test]
    fn out_of_range_or_foreign_conversions_are_invalid_casts() {
        assert_eq!(
            Datum::Long(1000).as_byte().unwrap_err(),
            EvalError::InvalidCast { from: DataType::Long, to: DataType::Byte }
        );
        assert_eq!(
            Datum::Bool(true).as_long().unwrap_err(),
            EvalError::InvalidCast { from: DataType::Boolean, to: DataType::Long }
        );
        assert!(Datum::Null.as_chars().is_err());
        assert!(Datum::Int(1).as_bytes().is_err());
    }

    #[test]
    fn string_and_bytes_conversions() {
        assert_eq!(Datum::Int(5).as_chars().unwrap(), "5");
        assert_eq!(Datum::Text("ab".into()).as_bytes().unwrap(), b"ab".to_vec());
        assert_eq!(Datum::Bytes(b"hi".to_vec()).as_chars().unwrap(), "hi");
        assert!(Datum::Text("TRUE".into()).as_bool().unwrap());
    }

    #[test]
    fn compare_across_numeric_types_and_nulls_last() {
        assert_eq!(Datum::Int(2).compare_to(&Datum::Long(10)).unwrap(), Ordering::Less);
        assert_eq!(Datum::Double(2.5).compare_to(&Datum::Int(2)).unwrap(), Ordering::Greater);
        assert_eq!(Datum::Double(f64::NAN).compare_to(&Datum::Double(1.0)).unwrap(), Ordering::Greater);
        assert_eq!(Datum::Null.compare_to(&Datum::Int(1)).unwrap(), Ordering::Greater);
        assert_eq!(Datum::Text("a".into()).compare_to(&Datum::Text("b".into())).unwrap(), Ordering::Less);
        assert!(matches!(
            Datum::Text("a".into()).compare_to(&Datum::Int(1)),
            Err(EvalError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn equality_propagates_null() {
        assert_eq!(Datum::Int(1).equals_to(&Datum::Long(1)).unwrap(), Datum::Bool(true));
        assert_eq!(Datum::Int(1).equals_to(&Datum::Null).unwrap(), Datum::Null);
    }

    #[test]
    fn enum_comparison_is_not_implemented() {
        assert!(matches!(Datum::Enum(1).equals_to(&Datum::Enum(1)), Err(EvalError::NotImplemented(_))));
        assert!(matches!(Datum::Enum(1).compare_to(&Datum::Int(1)), Err(EvalError::NotImplemented(_))));
    }

    #[test]
    fn arithmetic_widens_and_checks_division() {
        assert_eq!(Datum::Int(2).arith(ArithOp::Plus, &Datum::Long(3)).unwrap(), Datum::Long(5));
        assert_eq!(Datum::Int(7).arith(ArithOp::Modular, &Datum::Int(4)).unwrap(), Datum::Int(3));
        assert_eq!(Datum::Int(1).arith(ArithOp::Multiply, &Datum::Double(1.5)).unwrap(), Datum::Double(1.5));
        assert_eq!(Datum::Int(1).arith(ArithOp::Minus, &Datum::Null).unwrap(), Datum::Null);
        assert_eq!(Datum::Int(1).arith(ArithOp::Divide, &Datum::Int(0)).unwrap_err(), EvalError::DivisionByZero);
        assert!(Datum::Text("x".into()).arith(ArithOp::Plus, &Datum::Int(1)).is_err());
    }
}
