use std::cmp::Ordering;

use crate::{datum::Datum, eval::EvalError, function::{Accumulator, AggFunction}};

pub struct MinImpl;
pub struct MaxImpl;

struct ExtremeAcc {
    keep: Ordering,
    best: Option<Datum>,
}

impl ExtremeAcc {
    fn new(keep: Ordering) -> Self {
        Self { keep, best: None }
    }
}

impl Accumulator for ExtremeAcc {
    fn update(&mut self, args: &[Datum]) -> Result<(), EvalError> {
        let value = match args.first() {
            None | Some(Datum::Null) => return Ok(()),
            Some(v) => v,
        };
        let replace = match &self.best {
            None => true,
            Some(best) => value.compare_to(best)? == self.keep,
        };
        if replace {
            self.best = Some(value.clone());
        }
        Ok(())
    }

    fn finalize(&self) -> Datum {
        self.best.clone().unwrap_or(Datum::Null)
    }
}

impl AggFunction for MinImpl {
    fn create_accumulator(&self) -> Box<dyn Accumulator> {
        Box::new(ExtremeAcc::new(Ordering::Less))
    }
}

impl AggFunction for MaxImpl {
    fn create_accumulator(&self) -> Box<dyn Accumulator> {
        Box::new(ExtremeAcc::new(Ordering::Greater))
    }
}
