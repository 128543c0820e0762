use std::fmt;

/// Kind tag of a logical plan node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprType {
    Scan,
    Selection,
    Projection,
    GroupBy,
    Sort,
    Store,
    Join,
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExprType::Scan => "SCAN",
            ExprType::Selection => "SELECTION",
            ExprType::Projection => "PROJECTION",
            ExprType::GroupBy => "GROUP_BY",
            ExprType::Sort => "SORT",
            ExprType::Store => "STORE",
            ExprType::Join => "JOIN",
        };
        write!(f, "{}", name)
    }
}
