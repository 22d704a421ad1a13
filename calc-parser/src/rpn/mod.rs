//! The infix-to-postfix converter.
//!
//! This is a shunting-yard pass over the token stream: literals and constants go straight to
//! the output, operators wait on a stack until an operator of lower precedence (or the end of
//! the input) flushes them, and parentheses fence the stack. Function names also wait on the
//! stack and are bound to their operand when its closing parenthesis arrives.

pub mod token;

use crate::error::{kind, Error};
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use levenshtein::levenshtein;
use std::ops::Range;
use token::{BinOpKind, ConstKind, FuncKind, RpnToken, RpnTokenKind};

/// Names that can appear in an expression, for "did you mean" help.
const KNOWN_NAMES: [&str; 6] = ["sin", "cos", "tan", "e", "p", "ans"];

/// An entry waiting on the shunting stack.
#[derive(Debug)]
enum StackEntry {
    /// A binary operator.
    Op(BinOpKind, Range<usize>),

    /// A function name waiting for its parenthesized operand.
    Func(FuncKind, Range<usize>),

    /// An opening parenthesis.
    Paren(Range<usize>),
}

impl StackEntry {
    /// Parentheses and pending function names never outrank an incoming operator.
    fn precedence(&self) -> u8 {
        match self {
            Self::Op(op, _) => op.precedence(),
            Self::Func(_, _) | Self::Paren(_) => 0,
        }
    }
}

/// Converts an infix expression into its postfix token sequence. `ans` is substituted in place
/// of the previous-answer name.
pub fn infix_to_postfix(input: &str, ans: f64) -> Result<Vec<RpnToken>, Error> {
    let tokens = tokenize_complete(input)?;
    let mut output = Vec::new();
    let mut stack: Vec<StackEntry> = Vec::new();

    // the most recent significant token, used to decide whether a `-` has a left operand
    let mut prev: Option<TokenKind> = None;

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        match token.kind {
            TokenKind::Whitespace => {
                i += 1;
                continue;
            }
            TokenKind::Num => output.push(RpnToken {
                kind: RpnTokenKind::Num(parse_literal(token)?),
                span: token.span.clone(),
            }),
            TokenKind::Name => convert_name(token, ans, &mut output, &mut stack)?,
            TokenKind::OpenParen => stack.push(StackEntry::Paren(token.span.clone())),
            TokenKind::CloseParen => close_paren(token, &mut output, &mut stack)?,
            _ => {
                let op = bin_op(token.kind);

                // a `-` with no left operand signs the literal directly after it; anywhere
                // else (before a parenthesis or a function name, or separated from the
                // literal) it falls through and is treated as a binary operator
                if op == BinOpKind::Sub && sign_position(prev) {
                    if let Some(next) = tokens.get(i + 1) {
                        if next.kind == TokenKind::Num && next.span.start == token.span.end {
                            output.push(RpnToken {
                                kind: RpnTokenKind::Num(-parse_literal(next)?),
                                span: token.span.start..next.span.end,
                            });
                            prev = Some(TokenKind::Num);
                            i += 2;
                            continue;
                        }
                    }
                }

                while stack
                    .last()
                    .is_some_and(|top| top.precedence() >= op.precedence())
                {
                    pop_to_output(&mut stack, &mut output);
                }
                stack.push(StackEntry::Op(op, token.span.clone()));
            }
        }

        prev = Some(token.kind);
        i += 1;
    }

    for entry in stack.into_iter().rev() {
        match entry {
            StackEntry::Op(op, span) => output.push(RpnToken {
                kind: RpnTokenKind::Op(op),
                span,
            }),
            StackEntry::Func(func, span) => output.push(RpnToken {
                kind: RpnTokenKind::Func(func),
                span,
            }),
            StackEntry::Paren(span) => {
                return Err(Error::new(
                    vec![span],
                    kind::UnclosedParenthesis { opening: true },
                ))
            }
        }
    }

    Ok(output)
}

/// Whether a `-` at this point has no left operand to bind to: at the start of the input,
/// right after `(`, or right after another operator.
fn sign_position(prev: Option<TokenKind>) -> bool {
    match prev {
        None => true,
        Some(kind) => kind == TokenKind::OpenParen || kind.is_operator(),
    }
}

/// Parses a literal token into its value.
fn parse_literal(token: &Token) -> Result<f64, Error> {
    token.lexeme.parse().map_err(|_| {
        Error::new(
            vec![token.span.clone()],
            kind::InvalidNumber {
                lexeme: token.lexeme.to_string(),
            },
        )
    })
}

/// Maps an operator token to its operation. Only called for operator kinds.
fn bin_op(kind: TokenKind) -> BinOpKind {
    match kind {
        TokenKind::Add => BinOpKind::Add,
        TokenKind::Sub => BinOpKind::Sub,
        TokenKind::Mul => BinOpKind::Mul,
        TokenKind::Div => BinOpKind::Div,
        TokenKind::Mod => BinOpKind::Mod,
        TokenKind::Exp => BinOpKind::Exp,
        _ => unreachable!(),
    }
}

/// Classifies a name token: constants and the previous-answer name are emitted directly,
/// while function names wait on the stack for their operand.
fn convert_name(
    token: &Token,
    ans: f64,
    output: &mut Vec<RpnToken>,
    stack: &mut Vec<StackEntry>,
) -> Result<(), Error> {
    if let Some(constant) = ConstKind::from_name(token.lexeme) {
        output.push(RpnToken {
            kind: RpnTokenKind::Const(constant),
            span: token.span.clone(),
        });
    } else if token.lexeme == "ans" || token.lexeme == "A" {
        output.push(RpnToken {
            kind: RpnTokenKind::Num(ans),
            span: token.span.clone(),
        });
    } else if let Some(func) = FuncKind::from_name(token.lexeme) {
        stack.push(StackEntry::Func(func, token.span.clone()));
    } else {
        return Err(Error::new(
            vec![token.span.clone()],
            kind::UnknownName {
                name: token.lexeme.to_string(),
                suggestions: suggestions(token.lexeme),
            },
        ));
    }

    Ok(())
}

/// Pops entries to the output until the matching `(`, then binds a pending function name to
/// the operand that was just closed.
fn close_paren(
    token: &Token,
    output: &mut Vec<RpnToken>,
    stack: &mut Vec<StackEntry>,
) -> Result<(), Error> {
    loop {
        match stack.pop() {
            Some(StackEntry::Op(op, span)) => output.push(RpnToken {
                kind: RpnTokenKind::Op(op),
                span,
            }),
            Some(StackEntry::Func(func, span)) => output.push(RpnToken {
                kind: RpnTokenKind::Func(func),
                span,
            }),
            Some(StackEntry::Paren(_)) => break,
            None => {
                return Err(Error::new(
                    vec![token.span.clone()],
                    kind::UnclosedParenthesis { opening: false },
                ))
            }
        }
    }

    if matches!(stack.last(), Some(StackEntry::Func(_, _))) {
        pop_to_output(stack, output);
    }

    Ok(())
}

/// Pops the top stack entry into the output. Parentheses are handled by their own rules and
/// never reach this.
fn pop_to_output(stack: &mut Vec<StackEntry>, output: &mut Vec<RpnToken>) {
    match stack.pop() {
        Some(StackEntry::Op(op, span)) => output.push(RpnToken {
            kind: RpnTokenKind::Op(op),
            span,
        }),
        Some(StackEntry::Func(func, span)) => output.push(RpnToken {
            kind: RpnTokenKind::Func(func),
            span,
        }),
        Some(StackEntry::Paren(_)) | None => (),
    }
}

/// Known names ranked by edit distance from the given name, closest first.
pub(crate) fn suggestions(name: &str) -> Vec<String> {
    let mut ranked = KNOWN_NAMES
        .iter()
        .copied()
        .map(|candidate| (levenshtein(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= 2)
        .collect::<Vec<_>>();
    ranked.sort();
    ranked
        .into_iter()
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Converts the input and renders the postfix sequence as space-separated tokens.
    fn postfix(input: &str) -> String {
        infix_to_postfix(input, 0.0)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn converts_with_precedence() {
        assert_eq!(postfix("2+3*4"), "2 3 4 * +");
        assert_eq!(postfix("2*3+4"), "2 3 * 4 +");
        assert_eq!(postfix("2+3-4"), "2 3 + 4 -");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(postfix("(2+3)*4"), "2 3 + 4 *");
    }

    #[test]
    fn exponent_groups_to_the_left() {
        assert_eq!(postfix("2^3^2"), "2 3 ^ 2 ^");
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(postfix(" 2 +\t3 "), "2 3 +");
    }

    #[test]
    fn function_binds_to_its_parenthesized_operand() {
        assert_eq!(postfix("sin(0)"), "0 sin");
        assert_eq!(postfix("2*sin(0)"), "2 0 sin *");
        assert_eq!(postfix("cos(1+2)^2"), "1 2 + cos 2 ^");
    }

    #[test]
    fn constants_stay_symbolic() {
        assert_eq!(postfix("e+p"), "e p +");
    }

    #[test]
    fn answer_is_substituted() {
        let tokens = infix_to_postfix("ans*2", 2.5).unwrap();
        assert_eq!(tokens[0].kind, RpnTokenKind::Num(2.5));

        let tokens = infix_to_postfix("A", 7.0).unwrap();
        assert_eq!(tokens[0].kind, RpnTokenKind::Num(7.0));
    }

    #[test]
    fn sign_folds_into_adjacent_literal() {
        assert_eq!(postfix("-5"), "-5");
        assert_eq!(postfix("2^-3"), "2 -3 ^");
        assert_eq!(postfix("2--3"), "2 -3 -");
        assert_eq!(postfix("(-5+3)"), "-5 3 +");
    }

    #[test]
    fn mismatched_parentheses() {
        assert!(infix_to_postfix("(2+3", 0.0).is_err());
        assert!(infix_to_postfix("2+3)", 0.0).is_err());
    }

    #[test]
    fn invalid_character() {
        assert!(infix_to_postfix("2#3", 0.0).is_err());
    }

    #[test]
    fn malformed_literal() {
        assert!(infix_to_postfix("1.2.3", 0.0).is_err());
        assert!(infix_to_postfix(".", 0.0).is_err());
    }

    #[test]
    fn unknown_name() {
        assert!(infix_to_postfix("sun(1)", 0.0).is_err());
    }

    #[test]
    fn suggestions_rank_by_distance() {
        assert_eq!(suggestions("sun"), vec!["sin", "tan"]);
        assert_eq!(suggestions("coss"), vec!["cos"]);
        assert!(suggestions("qwxyz").is_empty());
    }
}
