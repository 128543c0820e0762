use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::DataType;

/// A typed field descriptor, optionally qualified by the table (or alias)
/// that produces it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    pub qualifier: Option<String>,
    pub name: String,
    pub data_type: DataType,
}

impl Column {
    pub fn new(qualifier: Option<&str>, name: &str, data_type: DataType) -> Self {
        Self {
            qualifier: qualifier.map(|q| q.to_string()),
            name: name.to_string(),
            data_type,
        }
    }

    /// Build a column from `table.column` or a bare `column`.
    pub fn parse(qualified_name: &str, data_type: DataType) -> Self {
        match qualified_name.split_once('.') {
            Some((qualifier, name)) => Self::new(Some(qualifier), name, data_type),
            None => Self::new(None, qualified_name, data_type),
        }
    }

    /// An unqualified column, used for computed outputs such as `sum_1`.
    pub fn bare(name: &str, data_type: DataType) -> Self {
        Self::new(None, name, data_type)
    }

    pub fn qualified_name(&self) -> String {
        match &self.qualifier {
            Some(qualifier) => format!("{}.{}", qualifier, self.name),
            None => self.name.clone(),
        }
    }

    pub fn is_qualified(&self) -> bool {
        self.qualifier.is_some()
    }

    /// Same column re-qualified with another table name.
    pub fn with_qualifier(&self, qualifier: &str) -> Self {
        Self {
            qualifier: Some(qualifier.to_string()),
            name: self.name.clone(),
            data_type: self.data_type,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.qualified_name(), self.data_type)
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column({})", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Column, DataType};

    #[test]
    fn parse_qualified_and_bare_names() {
        let qualified = Column::parse("people.age", DataType::Int);
        assert_eq!(qualified.qualifier.as_deref(), Some("people"));
        assert_eq!(qualified.name, "age");
        assert_eq!(qualified.qualified_name(), "people.age");

        let bare = Column::parse("age", DataType::Int);
        assert!(!bare.is_qualified());
        assert_eq!(bare.qualified_name(), "age");
    }

    #[test]
    fn equality_includes_the_type() {
        let a = Column::parse("t.a", DataType::Int);
        let b = Column::parse("t.a", DataType::Long);
        assert_ne!(a, b);
        assert_eq!(a, Column::new(Some("t"), "a", DataType::Int));
    }

    #[test]
    fn with_qualifier_keeps_name_and_type() {
        let c = Column::bare("id", DataType::Long).with_qualifier("orders");
        assert_eq!(c.qualified_name(), "orders.id");
        assert_eq!(c.data_type, DataType::Long);
    }
}
