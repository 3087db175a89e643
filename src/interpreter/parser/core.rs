use std::iter::Peekable;

use crate::{
    ast::{Arena, Expr, Id},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            binary::{parse_additive, token_to_binary_operator},
            normalize::normalize,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many parenthesized groups may be open at once.
///
/// Each open group costs one level of parser recursion, so the limit keeps
/// adversarial input such as `((((...1...))))` from exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Builds the syntax tree for a complete token sequence.
///
/// The tokens are first normalized (see [`normalize`]), then parsed as a
/// single expression. Every token must be consumed.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] if there are no tokens.
/// - [`ParseError::UnmatchedClosingParen`] if a `)` is left over.
/// - [`ParseError::UnexpectedToken`] if any other token is left over.
/// - [`ParseError::NestingTooDeep`] if more than [`MAX_NESTING_DEPTH`] groups
///   are open at once.
/// - Any error raised by the precedence tiers.
///
/// # Example
/// ```
/// use expression_solver::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("4(9/1)").unwrap();
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(expr.to_string(), "4*(9/1)");
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Expr> {
    let normalized = normalize(tokens);
    if normalized.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = normalized.iter().peekable();
    let mut arena = Arena::new();
    let root = parse_expression(&mut iter, &mut arena, 0)?;

    match iter.next() {
        None => Ok(Expr::new(arena, root)),
        Some((Token::RParen, position)) => {
            Err(ParseError::UnmatchedClosingParen { position: *position })
        },
        Some((token, position)) => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                                     position: *position, }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `arena`: Storage receiving the new nodes, children before parents.
/// - `depth`: Number of parenthesized groups enclosing this expression.
///
/// # Returns
/// The id of the parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               arena: &mut Arena,
                               depth: usize)
                               -> ParseResult<Id>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    parse_additive(tokens, arena, depth)
}

/// Checks that an operand can follow the operator just consumed.
///
/// Turns the three ways an operand can be missing into precise errors
/// before the primary parser is entered.
///
/// # Errors
/// - [`ParseError::MissingOperand`] at end of input or before `)`.
/// - [`ParseError::ConsecutiveOperators`] if another operator follows.
pub(in crate::interpreter::parser) fn expect_operand<'a, I>(tokens: &mut Peekable<I>,
                                                            operator: char,
                                                            operator_position: usize)
                                                            -> ParseResult<()>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.peek() {
        None | Some((Token::RParen, _)) => {
            Err(ParseError::MissingOperand { operator,
                                             position: operator_position })
        },
        Some((token, position)) => match token_to_binary_operator(token) {
            Some(second) => Err(ParseError::ConsecutiveOperators { first:    operator,
                                                                   second:   second.symbol(),
                                                                   position: *position, }),
            None => Ok(()),
        },
    }
}
