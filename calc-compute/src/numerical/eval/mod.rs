mod binary;
mod unary;

use calc_parser::tree::{ExprTree, Node};
use super::{ctxt::Ctxt, error::{kind, Error}};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the default context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&mut Default::default())
    }
}

impl Eval for Node {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        match self {
            Node::Leaf { value, .. } => Ok(*value),
            Node::Unary { func, operand, span } => {
                let operand = operand.eval(ctxt)?;
                unary::eval_operand(*func, span, operand)
            }
            Node::Binary { op, lhs, rhs, span } => {
                let left = lhs.eval(ctxt)?;
                let right = rhs.eval(ctxt)?;
                binary::eval_operands(*op, span, left, right)
            }
        }
    }
}

impl Eval for ExprTree {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        let root = self
            .root()
            .ok_or_else(|| Error::new(Vec::new(), kind::NothingToEvaluate))?;
        let result = root.eval(ctxt)?;
        ctxt.set_ans(result);
        Ok(result)
    }
}

/// Eval tests go through the whole pipeline, so ensure that parser tests pass before running
/// these.
#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use calc_parser::tree::ExprTree;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Builds a tree from the input and evaluates it with the given context.
    fn eval_str_with(input: &str, ctxt: &mut Ctxt) -> Result<f64, Error> {
        let mut tree = ExprTree::new();
        tree.build_from_infix(input, ctxt.ans()).unwrap();
        tree.eval(ctxt)
    }

    fn eval_str(input: &str) -> Result<f64, Error> {
        eval_str_with(input, &mut Ctxt::new())
    }

    #[test]
    fn binary_expr() {
        assert_eq!(eval_str("1 + 2").unwrap(), 3.0);
    }

    #[test]
    fn precedence() {
        assert_eq!(eval_str("2+3*4").unwrap(), 14.0);
        assert_eq!(eval_str("2*3+4").unwrap(), 10.0);
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(eval_str("(2+3)*4").unwrap(), 20.0);
        assert_eq!(eval_str("((1 + 9) / 5) * 3").unwrap(), 6.0);
    }

    #[test]
    fn power() {
        assert_eq!(eval_str("2^3").unwrap(), 8.0);
        assert_eq!(eval_str("2^-3").unwrap(), 0.125);
    }

    #[test]
    fn divide_by_zero() {
        assert!(eval_str("5/0").is_err());
    }

    #[test]
    fn zero_to_the_power_of_zero() {
        assert!(eval_str("0^0").is_err());
        assert_eq!(eval_str("0^2").unwrap(), 0.0);
    }

    #[test]
    fn modulus_by_zero() {
        assert!(eval_str("5%0").is_err());
        assert!(eval_str("5%0.9").is_err());
    }

    #[test]
    fn modulus_truncates_its_operands() {
        assert_eq!(eval_str("7.9%3").unwrap(), 1.0);
        assert_eq!(eval_str("-7%3").unwrap(), -1.0);
    }

    #[test]
    fn named_constants() {
        assert_float_absolute_eq!(eval_str("p").unwrap(), 3.1415926535, 1e-12);
        assert_float_absolute_eq!(eval_str("e^2").unwrap(), 7.389056098, 1e-6);
    }

    #[test]
    fn trig_functions() {
        assert_float_absolute_eq!(eval_str("sin(0)").unwrap(), 0.0, 1e-9);
        assert_float_absolute_eq!(eval_str("cos(0)").unwrap(), 1.0, 1e-9);
        assert_float_absolute_eq!(eval_str("tan(1)").unwrap(), 1.0f64.tan(), 1e-9);
        assert_float_absolute_eq!(eval_str("2*cos(0)+1").unwrap(), 3.0, 1e-9);
    }

    #[test]
    fn empty_tree() {
        let tree = ExprTree::new();
        assert!(tree.eval(&mut Ctxt::new()).is_err());
    }

    #[test]
    fn previous_answer_carries_between_evaluations() {
        let mut ctxt = Ctxt::new();
        assert_eq!(eval_str_with("2+3", &mut ctxt).unwrap(), 5.0);
        assert_eq!(eval_str_with("ans*2", &mut ctxt).unwrap(), 10.0);
        assert_eq!(eval_str_with("A+1", &mut ctxt).unwrap(), 11.0);
    }

    #[test]
    fn answer_defaults_to_zero() {
        assert_eq!(eval_str("ans").unwrap(), 0.0);
    }

    #[test]
    fn failed_evaluation_keeps_previous_answer() {
        let mut ctxt = Ctxt::new();
        assert_eq!(eval_str_with("2+3", &mut ctxt).unwrap(), 5.0);
        assert!(eval_str_with("1/0", &mut ctxt).is_err());
        assert_eq!(ctxt.ans(), 5.0);
    }

    #[test]
    fn session_stays_usable_after_errors() {
        let mut ctxt = Ctxt::new();
        let mut tree = ExprTree::new();

        assert!(tree.build_from_infix("2#3", ctxt.ans()).is_err());
        tree.clear();

        tree.build_from_infix("2+2", ctxt.ans()).unwrap();
        assert_eq!(tree.eval(&mut ctxt).unwrap(), 4.0);
    }
}
