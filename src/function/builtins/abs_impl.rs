use crate::{datum::Datum, eval::EvalError, function::GeneralFunction};

/// `abs(x)` for int4, int8 and float8. NULL in, NULL out.
pub struct AbsImpl;

impl GeneralFunction for AbsImpl {
    fn eval(&self, params: &[Datum]) -> Result<Datum, EvalError> {
        match params {
            [Datum::Null] => Ok(Datum::Null),
            [Datum::Int(v)] => Ok(Datum::Int(v.wrapping_abs())),
            [Datum::Long(v)] => Ok(Datum::Long(v.wrapping_abs())),
            [Datum::Double(v)] => Ok(Datum::Double(v.abs())),
            _ => Err(EvalError::FunctionArgMismatch {
                name: "abs".into(),
                got: params.iter().map(|d| d.data_type()).collect(),
            }),
        }
    }
}
