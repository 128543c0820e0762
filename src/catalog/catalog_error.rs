use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    DuplicateColumn(String),
    UnknownColumn(String),
    UnknownTable(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateColumn(name) => write!(f, "column \"{}\" already exists in schema", name),
            CatalogError::UnknownColumn(name) => write!(f, "column \"{}\" does not exist", name),
            CatalogError::UnknownTable(name) => write!(f, "table \"{}\" does not exist", name),
        }
    }
}

impl std::error::Error for CatalogError {}
