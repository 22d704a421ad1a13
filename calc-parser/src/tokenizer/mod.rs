pub mod token;

use crate::error::{kind, Error};
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, failing on
/// the first character the lexer does not recognize.
pub fn tokenize_complete(input: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => {
                return Err(Error::new(
                    vec![lexer.span()],
                    kind::InvalidCharacter {
                        ch: lexer.slice().chars().next().unwrap_or(' '),
                    },
                ))
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(
        input: &'source str,
        expected: [(TokenKind, &'source str); N],
    ) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Num, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Num, "2"),
            ],
        );
    }

    #[test]
    fn function_call() {
        compare_tokens(
            "2*sin(0.5)",
            [
                (TokenKind::Num, "2"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Num, "0.5"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn maximal_runs() {
        compare_tokens(
            "1.25e % 10",
            [
                (TokenKind::Num, "1.25"),
                (TokenKind::Name, "e"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Mod, "%"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Num, "10"),
            ],
        );
    }

    #[test]
    fn unrecognized_character() {
        assert!(tokenize_complete("2#3").is_err());
        assert!(tokenize_complete("2 + _").is_err());
    }
}
