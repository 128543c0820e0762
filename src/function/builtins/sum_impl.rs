use crate::{datum::{ArithOp, Datum}, eval::EvalError, function::{Accumulator, AggFunction}};

/// `sum(x)`; NULLs are ignored and an all-NULL group sums to NULL.
pub struct SumImpl;

#[derive(Default)]
struct SumAcc {
    total: Option<Datum>,
}

impl Accumulator for SumAcc {
    fn update(&mut self, args: &[Datum]) -> Result<(), EvalError> {
        let value = match args.first() {
            None | Some(Datum::Null) => return Ok(()),
            Some(v) => v,
        };
        let widened = match value {
            Datum::Float(_) | Datum::Double(_) => Datum::Double(value.as_double()?),
            other => Datum::Long(other.as_long()?),
        };
        self.total = Some(match self.total.take() {
            Some(total) => total.arith(ArithOp::Plus, &widened)?,
            None => widened,
        });
        Ok(())
    }

    fn finalize(&self) -> Datum {
        self.total.clone().unwrap_or(Datum::Null)
    }
}

impl AggFunction for SumImpl {
    fn create_accumulator(&self) -> Box<dyn Accumulator> {
        Box::new(SumAcc::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::{datum::Datum, function::{AggFunction, SumImpl}};

    #[test]
    fn sum_int_and_float_and_nulls() {
        let mut a = SumImpl.create_accumulator();
        a.update(&[Datum::Null]).unwrap();
        a.update(&[Datum::Int(2)]).unwrap();
        a.update(&[Datum::Int(3)]).unwrap();
        assert_eq!(a.finalize(), Datum::Long(5));

        let mut b = SumImpl.create_accumulator();
        b.update(&[Datum::Double(1.5)]).unwrap();
        b.update(&[Datum::Double(2.25)]).unwrap();
        assert_eq!(b.finalize(), Datum::Double(3.75));

        let empty = SumImpl.create_accumulator();
        assert_eq!(empty.finalize(), Datum::Null);
    }
}
