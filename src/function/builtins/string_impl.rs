use crate::{datum::Datum, eval::EvalError, function::GeneralFunction};

pub struct UpperImpl;
pub struct LowerImpl;
pub struct LengthImpl;

fn text_arg<'a>(name: &str, params: &'a [Datum]) -> Result<Option<&'a str>, EvalError> {
    match params {
        [Datum::Null] => Ok(None),
        [Datum::Text(s)] => Ok(Some(s.as_str())),
        _ => Err(EvalError::FunctionArgMismatch {
            name: name.into(),
            got: params.iter().map(|d| d.data_type()).collect(),
        }),
    }
}

impl GeneralFunction for UpperImpl {
    fn eval(&self, params: &[Datum]) -> Result<Datum, EvalError> {
        Ok(text_arg("upper", params)?.map_or(Datum::Null, |s| Datum::Text(s.to_uppercase())))
    }
}

impl GeneralFunction for LowerImpl {
    fn eval(&self, params: &[Datum]) -> Result<Datum, EvalError> {
        Ok(text_arg("lower", params)?.map_or(Datum::Null, |s| Datum::Text(s.to_lowercase())))
    }
}

impl GeneralFunction for LengthImpl {
    fn eval(&self, params: &[Datum]) -> Result<Datum, EvalError> {
        Ok(text_arg("length", params)?.map_or(Datum::Null, |s| Datum::Int(s.chars().count() as i32)))
    }
}
