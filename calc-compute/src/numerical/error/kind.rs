//! The errors that can occur while evaluating an expression tree.

use ariadne::Report;
use calc_error::{report, ErrorKind};
use std::ops::Range;

/// Evaluation was requested while no tree is built.
#[derive(Debug, Clone, PartialEq)]
pub struct NothingToEvaluate;

impl ErrorKind for NothingToEvaluate {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "nothing to evaluate".to_string(),
            Vec::new(),
            Some("enter an expression first".to_string()),
        )
    }
}

/// The right operand of a division evaluated to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionByZero;

impl ErrorKind for DivisionByZero {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "cannot divide by zero".to_string(),
            vec!["the divisor of this division is zero".to_string()],
            None,
        )
    }
}

/// Both operands of an exponentiation evaluated to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroToThePowerOfZero;

impl ErrorKind for ZeroToThePowerOfZero {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "cannot compute `0^0`".to_string(),
            vec!["both operands of this exponentiation are zero".to_string()],
            Some("`0^0` is an indeterminate form".to_string()),
        )
    }
}

/// The right operand of a modulus truncated to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ModulusByZero;

impl ErrorKind for ModulusByZero {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "cannot compute a modulus by zero".to_string(),
            vec!["the divisor of this modulus truncates to zero".to_string()],
            Some("modulus operands are truncated to integers before the remainder is taken".to_string()),
        )
    }
}

/// `tan` was applied at a point where the cosine approximation is exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TanUndefined;

impl ErrorKind for TanUndefined {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "cannot compute tan(x) when cos(x) = 0".to_string(),
            vec!["this function call".to_string()],
            Some("tan(x) = sin(x) / cos(x), which is undefined where cos(x) = 0".to_string()),
        )
    }
}
