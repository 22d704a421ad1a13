use calc_parser::rpn::token::FuncKind;
use crate::funcs;
use crate::numerical::error::{kind, Error};
use std::ops::Range;

/// Applies a prefix function to its evaluated operand.
pub(crate) fn eval_operand(func: FuncKind, span: &Range<usize>, operand: f64) -> Result<f64, Error> {
    match func {
        FuncKind::Sin => Ok(funcs::sin(operand)),
        FuncKind::Cos => Ok(funcs::cos(operand)),
        FuncKind::Tan => funcs::tan(operand)
            .ok_or_else(|| Error::new(vec![span.clone()], kind::TanUndefined)),
    }
}
