use crate::interpreter::lexer::{Spanned, Token};

/// Rewrites a token stream so that every operation is explicit.
///
/// Three rewrites are applied in a single left-to-right pass:
/// - `)` directly followed by `(` gets a `*` between them: `(2-4)(9*0)`.
/// - an integer directly followed by `(` gets a `*`: `4(9/1)`.
/// - a `-` at the very start or right after `(` gets an implicit `0` left
///   operand: `-5+3` reads as `0-5+3`.
///
/// A `-` following another operator is left alone, so `2*-3` still fails as
/// two consecutive operators. Inserted tokens take the position of the token
/// that triggered them.
///
/// # Example
/// ```
/// use expression_solver::interpreter::{
///     lexer::{Token, tokenize},
///     parser::normalize::normalize,
/// };
///
/// let tokens = normalize(&tokenize("2(3)(4)").unwrap());
/// let kinds: Vec<Token> = tokens.into_iter().map(|(t, _)| t).collect();
/// assert_eq!(kinds,
///            vec![Token::Integer(2),
///                 Token::Star,
///                 Token::LParen,
///                 Token::Integer(3),
///                 Token::RParen,
///                 Token::Star,
///                 Token::LParen,
///                 Token::Integer(4),
///                 Token::RParen]);
/// ```
#[must_use]
pub fn normalize(tokens: &[Spanned]) -> Vec<Spanned> {
    let mut out: Vec<Spanned> = Vec::with_capacity(tokens.len() + tokens.len() / 2);

    for &(token, position) in tokens {
        let previous = out.last().map(|(t, _)| *t);
        match (previous, token) {
            (Some(Token::RParen | Token::Integer(_)), Token::LParen) => {
                out.push((Token::Star, position));
            },
            (None | Some(Token::LParen), Token::Minus) => {
                out.push((Token::Integer(0), position));
            },
            _ => {},
        }
        out.push((token, position));
    }

    out
}
