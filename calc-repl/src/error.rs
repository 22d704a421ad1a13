use ariadne::Source;
use calc_compute::numerical::error::Error as EvalError;
use calc_parser::error::Error as ParseError;

/// Utility enum to package errors that can occur while parsing / evaluating.
pub enum Error {
    /// An error that occurred while building the expression tree.
    Parse(ParseError),

    /// An error that occurred while evaluating.
    Eval(EvalError),
}

impl Error {
    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's report type does not have a `Display` implementation, so the
    /// only way out is its `eprint` method.
    pub fn report_to_stderr(&self, input: &str) {
        let report = match self {
            Self::Parse(err) => err.build_report("input"),
            Self::Eval(err) => err.build_report("input"),
        };
        report.eprint(("input", Source::from(input))).unwrap();
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Self::Eval(err)
    }
}
