//! The expression tree and the stack machine that builds it from a postfix sequence.

mod traversal;

use crate::error::{kind, Error};
use crate::rpn::{
    self,
    token::{BinOpKind, FuncKind, RpnToken, RpnTokenKind},
};
use std::ops::Range;
pub use traversal::{Inorder, Postorder, Preorder};

/// A node in the expression tree. Each operator node exclusively owns its children, so the
/// tree is freed recursively when a node is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A finite value: a parsed literal, a resolved constant, or the substituted previous
    /// answer.
    Leaf {
        /// The stored value.
        value: f64,

        /// The region of the source code that this node was built from.
        span: Range<usize>,
    },

    /// A prefix function applied to a single operand.
    Unary {
        /// The function to apply.
        func: FuncKind,

        /// The operand the function applies to.
        operand: Box<Node>,

        /// The region of the source code naming the function.
        span: Range<usize>,
    },

    /// A binary operator combining two operands.
    Binary {
        /// The operation to perform.
        op: BinOpKind,

        /// The left operand.
        lhs: Box<Node>,

        /// The right operand.
        rhs: Box<Node>,

        /// The region of the source code naming the operator.
        span: Range<usize>,
    },
}

impl Node {
    /// The source region this node was built from.
    pub fn span(&self) -> &Range<usize> {
        match self {
            Node::Leaf { span, .. } | Node::Unary { span, .. } | Node::Binary { span, .. } => span,
        }
    }
}

/// An expression tree, owning its root node exclusively. The tree may be empty.
#[derive(Debug, Default)]
pub struct ExprTree {
    root: Option<Box<Node>>,
}

impl ExprTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current tree with one built from the given infix expression. The previous
    /// tree is dropped up front, so after a failed build the tree is empty.
    pub fn build_from_infix(&mut self, input: &str, ans: f64) -> Result<(), Error> {
        self.clear();
        let postfix = rpn::infix_to_postfix(input, ans)?;
        self.root = build(postfix)?;
        Ok(())
    }

    /// The root node, if a tree has been built.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Returns true if no tree has been built.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops the current tree. Calling this on an empty tree is a no-op.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// A rendering of the tree with each operator parenthesized between its operands.
    pub fn inorder(&self) -> Inorder<'_> {
        Inorder(self.root.as_deref())
    }

    /// A rendering of the tree with each operator before its operands.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder(self.root.as_deref())
    }

    /// A rendering of the tree with each operator after its operands.
    pub fn postorder(&self) -> Postorder<'_> {
        Postorder(self.root.as_deref())
    }
}

/// Folds a postfix sequence into a tree with a stack of nodes: values push, operators pop
/// their operands and push the combined node. A well-formed sequence leaves exactly one node
/// (or none, for empty input).
fn build(postfix: Vec<RpnToken>) -> Result<Option<Box<Node>>, Error> {
    let mut stack: Vec<Box<Node>> = Vec::new();

    for token in postfix {
        match token.kind {
            RpnTokenKind::Num(value) => stack.push(Box::new(Node::Leaf {
                value,
                span: token.span,
            })),
            RpnTokenKind::Const(constant) => stack.push(Box::new(Node::Leaf {
                value: constant.value(),
                span: token.span,
            })),
            RpnTokenKind::Func(func) => {
                let operand = stack.pop().ok_or_else(|| {
                    Error::new(
                        vec![token.span.clone()],
                        kind::MissingOperand {
                            name: func.name().to_string(),
                        },
                    )
                })?;
                stack.push(Box::new(Node::Unary {
                    func,
                    operand,
                    span: token.span,
                }));
            }
            RpnTokenKind::Op(op) => {
                let rhs = stack.pop();
                let lhs = stack.pop();
                let (Some(lhs), Some(rhs)) = (lhs, rhs) else {
                    return Err(Error::new(
                        vec![token.span],
                        kind::MissingOperand {
                            name: op.to_string(),
                        },
                    ));
                };
                stack.push(Box::new(Node::Binary {
                    op,
                    lhs,
                    rhs,
                    span: token.span,
                }));
            }
        }
    }

    let root = stack.pop();
    if !stack.is_empty() {
        return Err(Error::new(
            stack.iter().map(|node| node.span().clone()).collect(),
            kind::DanglingOperands,
        ));
    }

    Ok(root)
}
