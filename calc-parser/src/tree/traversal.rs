//! Lazy display adapters for the three canonical tree traversals. Each adapter writes its
//! rendering straight through the formatter in a single left-to-right pass; nothing is
//! buffered. An empty tree renders as the empty string.

use super::Node;
use std::fmt;

/// In-order rendering: every binary operator parenthesized between its operands, functions as
/// `name(operand)`.
#[derive(Debug, Clone, Copy)]
pub struct Inorder<'a>(pub(super) Option<&'a Node>);

impl fmt::Display for Inorder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(node) => write_inorder(node, f),
            None => Ok(()),
        }
    }
}

fn write_inorder(node: &Node, f: &mut fmt::Formatter) -> fmt::Result {
    match node {
        Node::Leaf { value, .. } => write!(f, "{}", value),
        Node::Unary { func, operand, .. } => {
            write!(f, "{}(", func)?;
            write_inorder(operand, f)?;
            write!(f, ")")
        }
        Node::Binary { op, lhs, rhs, .. } => {
            write!(f, "(")?;
            write_inorder(lhs, f)?;
            write!(f, " {} ", op)?;
            write_inorder(rhs, f)?;
            write!(f, ")")
        }
    }
}

/// Pre-order rendering: every operator before its operands, space-separated.
#[derive(Debug, Clone, Copy)]
pub struct Preorder<'a>(pub(super) Option<&'a Node>);

impl fmt::Display for Preorder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(node) => write_preorder(node, f),
            None => Ok(()),
        }
    }
}

fn write_preorder(node: &Node, f: &mut fmt::Formatter) -> fmt::Result {
    match node {
        Node::Leaf { value, .. } => write!(f, "{}", value),
        Node::Unary { func, operand, .. } => {
            write!(f, "{} ", func)?;
            write_preorder(operand, f)
        }
        Node::Binary { op, lhs, rhs, .. } => {
            write!(f, "{} ", op)?;
            write_preorder(lhs, f)?;
            write!(f, " ")?;
            write_preorder(rhs, f)
        }
    }
}

/// Post-order rendering: every operator after its operands, space-separated.
#[derive(Debug, Clone, Copy)]
pub struct Postorder<'a>(pub(super) Option<&'a Node>);

impl fmt::Display for Postorder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(node) => write_postorder(node, f),
            None => Ok(()),
        }
    }
}

fn write_postorder(node: &Node, f: &mut fmt::Formatter) -> fmt::Result {
    match node {
        Node::Leaf { value, .. } => write!(f, "{}", value),
        Node::Unary { func, operand, .. } => {
            write_postorder(operand, f)?;
            write!(f, " {}", func)
        }
        Node::Binary { op, lhs, rhs, .. } => {
            write_postorder(lhs, f)?;
            write!(f, " ")?;
            write_postorder(rhs, f)?;
            write!(f, " {}", op)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::ExprTree;
    use pretty_assertions::assert_eq;

    fn tree_of(input: &str) -> ExprTree {
        let mut tree = ExprTree::new();
        tree.build_from_infix(input, 0.0).unwrap();
        tree
    }

    #[test]
    fn inorder_parenthesizes_by_grouping() {
        assert_eq!(tree_of("2+3*4").inorder().to_string(), "(2 + (3 * 4))");
        assert_eq!(tree_of("(2+3)*4").inorder().to_string(), "((2 + 3) * 4)");
    }

    #[test]
    fn preorder_puts_operators_first() {
        assert_eq!(tree_of("2+3*4").preorder().to_string(), "+ 2 * 3 4");
    }

    #[test]
    fn postorder_puts_operators_last() {
        assert_eq!(tree_of("2+3*4").postorder().to_string(), "2 3 4 * +");
    }

    #[test]
    fn functions_render_in_each_order() {
        let tree = tree_of("sin(0)");
        assert_eq!(tree.inorder().to_string(), "sin(0)");
        assert_eq!(tree.preorder().to_string(), "sin 0");
        assert_eq!(tree.postorder().to_string(), "0 sin");
    }

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(ExprTree::new().inorder().to_string(), "");
        assert_eq!(ExprTree::new().preorder().to_string(), "");
        assert_eq!(ExprTree::new().postorder().to_string(), "");
    }
}
