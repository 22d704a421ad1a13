//! The syntax errors that can occur while converting or building an expression.

use ariadne::{Fmt, Report};
use calc_error::{report, ErrorKind, EXPR};
use std::ops::Range;

/// A character that is not part of the expression vocabulary was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidCharacter {
    /// The character that was not recognized.
    pub ch: char,
}

impl ErrorKind for InvalidCharacter {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("invalid character `{}` in expression", self.ch),
            vec!["this character".to_string()],
            Some(format!(
                "expressions are made of {}",
                "numbers, names, `+ - * / ^ %`, and parentheses".fg(EXPR)
            )),
        )
    }
}

/// A run of digits and `.` does not form a valid numeric literal.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumber {
    /// The malformed literal.
    pub lexeme: String,
}

impl ErrorKind for InvalidNumber {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("`{}` is not a valid number", self.lexeme),
            vec!["this literal".to_string()],
            None,
        )
    }
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was
    /// a closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnclosedParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "unclosed parenthesis".to_string(),
            vec!["this parenthesis is not closed".to_string()],
            Some(
                if self.opening {
                    "add a closing parenthesis `)` somewhere after this"
                } else {
                    "add an opening parenthesis `(` somewhere before this"
                }
                .to_string(),
            ),
        )
    }
}

/// A name that is not a known constant or function was used.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownName {
    /// The name that was not recognized.
    pub name: String,

    /// A list of similarly spelled names, if any.
    pub suggestions: Vec<String>,
}

impl ErrorKind for UnknownName {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("`{}` is not a known constant or function", self.name),
            vec!["this name".to_string()],
            Some(if self.suggestions.is_empty() {
                "the known names are `sin`, `cos`, `tan`, `e`, `p`, and `ans`".to_string()
            } else if self.suggestions.len() == 1 {
                format!("did you mean `{}`?", (&*self.suggestions[0]).fg(EXPR))
            } else {
                format!(
                    "did you mean one of these? {}",
                    self.suggestions
                        .iter()
                        .map(|s| format!("`{}`", s.fg(EXPR)))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }),
        )
    }
}

/// An operator or function did not have enough operands to apply to.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingOperand {
    /// The operator symbol or function name that was starved.
    pub name: String,
}

impl ErrorKind for MissingOperand {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("not enough operands for `{}`", self.name),
            vec!["this is missing an operand".to_string()],
            None,
        )
    }
}

/// The expression left more than one value behind, so it does not reduce to a single result.
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingOperands;

impl ErrorKind for DanglingOperands {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "expression does not reduce to a single value".to_string(),
            spans
                .iter()
                .map(|_| "this value is never used".to_string())
                .collect(),
            Some("add an operator to combine the values".to_string()),
        )
    }
}
