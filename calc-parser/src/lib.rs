//! Parsing pipeline for the calculator.
//!
//! An infix expression goes through three stages: the [`tokenizer`] lexes it into tokens, the
//! [`rpn`] converter reorders those tokens into a postfix sequence with the shunting-yard
//! algorithm, and the [`tree`] builder folds the postfix sequence into an expression tree
//! ready for evaluation.

pub mod consts;
pub mod error;
pub mod rpn;
pub mod tokenizer;
pub mod tree;
