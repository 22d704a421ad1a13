use calc_parser::rpn::token::BinOpKind;
use crate::numerical::error::{kind, Error};
use std::ops::Range;

/// Combines two evaluated operands, enforcing the domain rules for `/`, `^` and `%`. Edge
/// cases of `^` other than `0^0` (negative bases with fractional exponents, overflow) are
/// left to `powf` and may produce NaN or infinity.
pub(crate) fn eval_operands(
    op: BinOpKind,
    span: &Range<usize>,
    left: f64,
    right: f64,
) -> Result<f64, Error> {
    match op {
        BinOpKind::Add => Ok(left + right),
        BinOpKind::Sub => Ok(left - right),
        BinOpKind::Mul => Ok(left * right),
        BinOpKind::Div => {
            if right == 0.0 {
                Err(Error::new(vec![span.clone()], kind::DivisionByZero))
            } else {
                Ok(left / right)
            }
        }
        BinOpKind::Exp => {
            if left == 0.0 && right == 0.0 {
                Err(Error::new(vec![span.clone()], kind::ZeroToThePowerOfZero))
            } else {
                Ok(left.powf(right))
            }
        }
        BinOpKind::Mod => {
            // both operands truncate to integers before the remainder is taken; the result
            // takes the sign of the left operand
            let (left, right) = (left.trunc() as i64, right.trunc() as i64);
            if right == 0 {
                Err(Error::new(vec![span.clone()], kind::ModulusByZero))
            } else {
                Ok((left % right) as f64)
            }
        }
    }
}
