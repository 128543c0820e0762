use crate::{
    catalog::{Column, DataType},
    eval::EvalNode,
};

/// One output column of a projection or group-by: an expression and an
/// optional alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub eval: EvalNode,
    pub alias: Option<String>,
}

impl Target {
    pub fn new(eval: EvalNode) -> Self {
        Self { eval, alias: None }
    }

    pub fn aliased(eval: EvalNode, alias: &str) -> Self {
        Self { eval, alias: Some(alias.to_string()) }
    }

    pub fn field(column: Column) -> Self {
        Self::new(EvalNode::field(column))
    }

    /// Name of the output column produced by this target at position `idx`.
    pub fn column_name(&self, idx: usize) -> String {
        if let Some(alias) = &self.alias {
            return alias.clone();
        }
        match &self.eval {
            EvalNode::Field(f) => f.column.qualified_name(),
            other => format!("{}_{}", other.name(), idx),
        }
    }

    pub fn value_type(&self) -> DataType {
        self.eval.value_type()
    }

    /// The output column itself.
    pub fn to_column(&self, idx: usize) -> Column {
        Column::parse(&self.column_name(idx), self.value_type())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::{Column, DataType, MemoryCatalog},
        eval::{EvalNode, FuncCallEval},
        planner::Target,
    };

    #[test]
    fn output_column_naming() {
        let a = Column::parse("t.a", DataType::Int);
        assert_eq!(Target::field(a.clone()).column_name(0), "t.a");
        assert_eq!(Target::aliased(EvalNode::field(a.clone()), "total").column_name(3), "total");

        let catalog = MemoryCatalog::new();
        let sum: EvalNode = FuncCallEval::bind(&catalog, "sum", vec![EvalNode::field(a)]).unwrap().into();
        let t = Target::new(sum);
        assert_eq!(t.column_name(1), "sum_1");
        assert_eq!(t.to_column(1), Column::bare("sum_1", DataType::Long));
    }
}
