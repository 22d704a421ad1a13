/// A context to use when evaluating an expression, holding the session state that outlives a
/// single evaluation: the result of the most recent successful one.
#[derive(Debug, Clone, Default)]
pub struct Ctxt {
    /// The previous answer. Read by the converter when an expression names it, written only
    /// between evaluations.
    ans: f64,
}

impl Ctxt {
    /// Creates a context with no previous answer (it reads as 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent result, or 0 if nothing has been evaluated yet.
    pub fn ans(&self) -> f64 {
        self.ans
    }

    /// Records the result of a successful evaluation.
    pub(crate) fn set_ans(&mut self, value: f64) {
        self.ans = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_starts_at_zero() {
        assert_eq!(Ctxt::new().ans(), 0.0);
    }
}
