use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of an integer expression.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Literals are never signed.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// A token paired with its byte offset in the whitespace-stripped source.
pub type Spanned = (Token, usize);

/// Removes every whitespace character from `source`.
///
/// Whitespace carries no meaning in an expression, so `1 2` reads as `12`.
///
/// ```
/// use expression_solver::interpreter::lexer::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" (1 + 2)\t* 3\n"), "(1+2)*3");
/// ```
#[must_use]
pub fn strip_whitespace(source: &str) -> String {
    source.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Converts source text into a sequence of positioned tokens.
///
/// Whitespace is stripped first; positions refer to the stripped text.
///
/// # Errors
/// - [`LexError::InvalidCharacter`] for any character outside
///   `0-9 + - * / ^ ( )`.
/// - [`LexError::LiteralTooLarge`] for digit runs that do not fit in `i64`.
///
/// # Example
/// ```
/// use expression_solver::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12 * (3)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(12), 0),
///                 (Token::Star, 2),
///                 (Token::LParen, 3),
///                 (Token::Integer(3), 4),
///                 (Token::RParen, 5)]);
///
/// assert!(tokenize("1@2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, LexError> {
    let stripped = strip_whitespace(source);
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(&stripped);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let slice = lexer.slice();
                if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(LexError::LiteralTooLarge { literal: slice.to_string(),
                                                           position });
                }
                let character = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::InvalidCharacter { character, position });
            },
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the digits overflow `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
