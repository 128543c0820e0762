use crate::{
    catalog::{Column, Schema},
    datum::{Datum, Tuple},
    eval::EvalError,
};

/// Reference to one column of the input row.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEval {
    pub column: Column,
}

impl FieldEval {
    pub fn new(column: Column) -> Self {
        Self { column }
    }

    /// Position of the referenced column in `schema`.
    ///
    /// The qualified name must match exactly, except that an unqualified
    /// reference may match a qualified column by name and a qualified
    /// reference may match an unqualified column. Two different qualifiers
    /// never match.
    pub fn resolve(&self, schema: &Schema) -> Option<usize> {
        schema.column_index(&self.column.qualified_name()).or_else(|| {
            if !self.column.is_qualified() {
                return None;
            }
            schema
                .columns()
                .iter()
                .position(|c| c.qualifier.is_none() && c.name == self.column.name)
        })
    }

    pub fn eval(&self, schema: &Schema, tuple: &Tuple) -> Result<Datum, EvalError> {
        let name = self.column.qualified_name();
        let idx = self.resolve(schema).ok_or_else(|| EvalError::UnknownColumn(name.clone()))?;
        tuple.get(idx).cloned().ok_or(EvalError::UnknownColumn(name))
    }

    /// Point this reference at another column.
    pub fn replace_column(&mut self, column: Column) {
        self.column = column;
    }
}
