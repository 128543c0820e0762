use crate::{datum::Datum, eval::EvalError, function::{Accumulator, AggFunction}};

/// `count(*)` (no arguments) counts rows, `count(x)` counts non-NULL values.
pub struct CountImpl;

#[derive(Default)]
struct CountAcc {
    n: i64,
}

impl Accumulator for CountAcc {
    fn update(&mut self, args: &[Datum]) -> Result<(), EvalError> {
        match args.first() {
            Some(Datum::Null) => {}
            _ => self.n += 1,
        }
        Ok(())
    }

    fn finalize(&self) -> Datum {
        Datum::Long(self.n)
    }
}

impl AggFunction for CountImpl {
    fn create_accumulator(&self) -> Box<dyn Accumulator> {
        Box::new(CountAcc::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::{datum::Datum, function::{AggFunction, CountImpl}};

    #[test]
    fn count_star_and_count_expr() {
        let mut acc = CountImpl.create_accumulator();
        acc.update(&[]).unwrap();
        acc.update(&[Datum::Null]).unwrap();
        acc.update(&[Datum::Int(1)]).unwrap();
        assert_eq!(acc.finalize(), Datum::Long(2));
    }
}
