use std::iter::Peekable;

use crate::{
    ast::{Arena, Id, Node},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::{MAX_NESTING_DEPTH, ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := integer
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `arena`: Node storage.
/// - `depth`: Number of groups already open around this primary.
///
/// # Returns
/// The id of the parsed primary node or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                   arena: &mut Arena,
                                   depth: usize)
                                   -> ParseResult<Id>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let peeked = tokens.peek().ok_or(ParseError::EmptyExpression)?;

    match peeked {
        (Token::Integer(value), position) => {
            let literal = Node::Literal { value:    *value,
                                          position: *position, };
            tokens.next();
            Ok(arena.alloc(literal))
        },
        (Token::LParen, _) => parse_grouping(tokens, arena, depth),
        (Token::RParen, position) => {
            Err(ParseError::UnmatchedClosingParen { position: *position })
        },
        (tok, position) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                              position: *position, }),
    }
}

/// Parses a parenthesized expression.
///
/// The group must contain a complete expression; `()` is rejected rather than
/// read as zero.
///
/// # Errors
/// - [`ParseError::NestingTooDeep`] if this group would exceed
///   [`MAX_NESTING_DEPTH`].
/// - [`ParseError::EmptyGroup`] for `()`.
/// - [`ParseError::ExpectedClosingParen`] if the input ends before `)`.
/// - [`ParseError::UnexpectedToken`] if something other than `)` follows the
///   inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         arena: &mut Arena,
                         depth: usize)
                         -> ParseResult<Id>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let open = match tokens.next() {
        Some((Token::LParen, position)) => *position,
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:    format!("expected '(', found {tok}"),
                                                     position: *position, });
        },
        None => return Err(ParseError::EmptyExpression),
    };

    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                position: open, });
    }

    match tokens.peek() {
        None => return Err(ParseError::ExpectedClosingParen { position: open }),
        Some((Token::RParen, _)) => return Err(ParseError::EmptyGroup { position: open }),
        Some(_) => {},
    }

    let inner = parse_expression(tokens, arena, depth + 1)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                   position: *position, }),
        None => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}
