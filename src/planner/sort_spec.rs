use serde::{Deserialize, Serialize};

use crate::catalog::Column;

/// Sort key: column plus direction and null placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: Column,
    pub ascending: bool,
    pub null_first: bool,
}

impl SortSpec {
    /// Ascending, nulls last.
    pub fn new(column: Column) -> Self {
        Self { column, ascending: true, null_first: false }
    }

    pub fn from(column: Column, ascending: bool, null_first: bool) -> Self {
        Self { column, ascending, null_first }
    }

    pub fn desc(column: Column) -> Self {
        Self { column, ascending: false, null_first: false }
    }
}
