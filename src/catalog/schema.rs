use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogError, Column};

/// Ordered list of columns describing a row shape.
///
/// Qualified names are unique inside a schema; the `index` map keeps
/// name lookups O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Schema {
    columns: Vec<Column>,
    index: IndexMap<String, usize>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(columns: Vec<Column>) -> Result<Self, CatalogError> {
        let mut schema = Self::new();
        for column in columns {
            schema.add_column(column)?;
        }
        Ok(schema)
    }

    pub fn add_column(&mut self, column: Column) -> Result<&mut Self, CatalogError> {
        let key = column.qualified_name();
        if self.index.contains_key(&key) {
            return Err(CatalogError::DuplicateColumn(key));
        }
        self.index.insert(key, self.columns.len());
        self.columns.push(column);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, idx: usize) -> Option<&Column> {
        self.columns.get(idx)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.index.contains_key(qualified_name)
    }

    pub fn column_by_qualified_name(&self, qualified_name: &str) -> Option<&Column> {
        self.index.get(qualified_name).map(|&idx| &self.columns[idx])
    }

    /// Position of a column by name.
    ///
    /// An exact qualified-name match wins; otherwise an unqualified `name`
    /// matches the first column whose bare name is `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        if let Some(&idx) = self.index.get(name) {
            return Some(idx);
        }
        if name.contains('.') {
            return None;
        }
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.column_index(name).map(|idx| &self.columns[idx])
    }

    /// Columns of `self` followed by the columns of `other`.
    pub fn concat(&self, other: &Schema) -> Result<Schema, CatalogError> {
        let mut merged = self.clone();
        for column in &other.columns {
            merged.add_column(column.clone())?;
        }
        Ok(merged)
    }

    /// Every column re-qualified with `qualifier`.
    pub fn qualify(&self, qualifier: &str) -> Result<Schema, CatalogError> {
        Schema::from_columns(self.columns.iter().map(|c| c.with_qualifier(qualifier)).collect())
    }
}

impl TryFrom<Vec<Column>> for Schema {
    type Error = CatalogError;

    fn try_from(columns: Vec<Column>) -> Result<Self, Self::Error> {
        Schema::from_columns(columns)
    }
}

impl From<Schema> for Vec<Column> {
    fn from(schema: Schema) -> Self {
        schema.columns
    }
}
