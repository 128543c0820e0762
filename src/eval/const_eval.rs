use crate::datum::Datum;

#[derive(Debug, Clone, PartialEq)]
pub struct ConstEval {
    pub value: Datum,
}

impl ConstEval {
    pub fn new(value: Datum) -> Self {
        Self { value }
    }
}
