use crate::{datum::Datum, eval::EvalError};

/// The per-group state of an aggregate.
///
/// The caller evaluates the call's arguments for every row, feeds them to
/// `update` and reads the group result with `finalize` once all rows are seen.
pub trait Accumulator: Send {
    fn update(&mut self, args: &[Datum]) -> Result<(), EvalError>;

    fn finalize(&self) -> Datum;
}
