use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type of a column, a datum or an expression result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    Text,
    Enum,
    /// Type of the NULL literal; compatible with every parameter type.
    Null,
}

impl DataType {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::Byte | DataType::Short | DataType::Int | DataType::Long | DataType::Float | DataType::Double
        )
    }

    pub fn is_integral(&self) -> bool {
        matches!(self, DataType::Byte | DataType::Short | DataType::Int | DataType::Long)
    }

    /// Result type of an arithmetic operation between `a` and `b`.
    ///
    /// Integral types widen to the larger one, any floating point operand
    /// widens the result to `Float`/`Double`. Returns `None` when either side
    /// is not numeric (Null widens to the other side).
    pub fn widen(a: DataType, b: DataType) -> Option<DataType> {
        use DataType::*;
        if a == Null { return if b.is_numeric() || b == Null { Some(b) } else { None }; }
        if b == Null { return if a.is_numeric() { Some(a) } else { None }; }
        if !a.is_numeric() || !b.is_numeric() {
            return None;
        }
        if a == Double || b == Double {
            return Some(Double);
        }
        if a == Float || b == Float {
            return Some(if a == Long || b == Long { Double } else { Float });
        }
        Some(if a.rank() >= b.rank() { a } else { b })
    }

    fn rank(&self) -> u8 {
        match self {
            DataType::Byte => 1,
            DataType::Short => 2,
            DataType::Int => 3,
            DataType::Long => 4,
            DataType::Float => 5,
            DataType::Double => 6,
            _ => 0,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Boolean => "bool",
            DataType::Byte => "int1",
            DataType::Short => "int2",
            DataType::Int => "int4",
            DataType::Long => "int8",
            DataType::Float => "float4",
            DataType::Double => "float8",
            DataType::Bytes => "bytea",
            DataType::Text => "text",
            DataType::Enum => "enum",
            DataType::Null => "null",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::DataType;

    #[test]
    fn widen_integral_takes_the_larger_type() {
        assert_eq!(DataType::widen(DataType::Int, DataType::Long), Some(DataType::Long));
        assert_eq!(DataType::widen(DataType::Short, DataType::Byte), Some(DataType::Short));
    }

    #[test]
    fn widen_with_floating_point() {
        assert_eq!(DataType::widen(DataType::Int, DataType::Float), Some(DataType::Float));
        assert_eq!(DataType::widen(DataType::Long, DataType::Float), Some(DataType::Double));
        assert_eq!(DataType::widen(DataType::Double, DataType::Byte), Some(DataType::Double));
    }

    #[test]
    fn widen_rejects_non_numeric() {
        assert_eq!(DataType::widen(DataType::Text, DataType::Int), None);
        assert_eq!(DataType::widen(DataType::Boolean, DataType::Boolean), None);
        assert_eq!(DataType::widen(DataType::Null, DataType::Int), Some(DataType::Int));
    }
}
