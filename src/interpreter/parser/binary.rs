use std::iter::Peekable;

use crate::{
    ast::{Arena, BinaryOperator, Id, Node},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, expect_operand},
            primary::parse_primary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `arena`: Node storage.
/// - `depth`: Current parenthesis nesting.
///
/// # Returns
/// The id of the `Node::BinaryOp` at the top of the parsed chain.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                        arena: &mut Arena,
                        depth: usize)
                        -> ParseResult<Id>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut left = parse_multiplicative(tokens, arena, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = *position;
            tokens.next();
            expect_operand(tokens, op.symbol(), position)?;
            let right = parse_multiplicative(tokens, arena, depth)?;
            left = arena.alloc(Node::BinaryOp { left,
                                                op,
                                                right,
                                                position });
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := exponent (("*" | "/") exponent)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `arena`: Node storage.
/// - `depth`: Current parenthesis nesting.
///
/// # Returns
/// The id of the node combining exponent-level operands.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                        arena: &mut Arena,
                        depth: usize)
                        -> ParseResult<Id>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut left = parse_exponent(tokens, arena, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let position = *position;
            tokens.next();
            expect_operand(tokens, op.symbol(), position)?;
            let right = parse_exponent(tokens, arena, depth)?;
            left = arena.alloc(Node::BinaryOp { left,
                                                op,
                                                right,
                                                position });
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as
/// `a ^ (b ^ c)`. The operands of a chain are collected first and then
/// folded from the right, so long chains do not deepen the call stack.
///
/// The rule is: `exponent := primary ("^" primary)*`, grouped from the right.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `arena`: Node storage.
/// - `depth`: Current parenthesis nesting.
///
/// # Returns
/// The id of the outermost exponentiation node, or of the lone operand.
///
/// # Example
/// ```
/// use expression_solver::parse_expression_str;
///
/// let chained = parse_expression_str("2^3^2").unwrap();
/// let grouped = parse_expression_str("2^(3^2)").unwrap();
/// assert_eq!(chained.to_string(), "2^3^2");
/// assert_eq!(grouped.to_string(), chained.to_string());
/// ```
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>,
                             arena: &mut Arena,
                             depth: usize)
                             -> ParseResult<Id>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let first = parse_primary(tokens, arena, depth)?;

    // (position of the `^` before the operand, operand)
    let mut rest = Vec::new();
    while let Some((Token::Caret, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        expect_operand(tokens, BinaryOperator::Pow.symbol(), position)?;
        rest.push((position, parse_primary(tokens, arena, depth)?));
    }

    let Some((mut position, mut exponent)) = rest.pop() else {
        return Ok(first);
    };
    while let Some((previous, base)) = rest.pop() {
        exponent = arena.alloc(Node::BinaryOp { left:  base,
                                                op:    BinaryOperator::Pow,
                                                right: exponent,
                                                position });
        position = previous;
    }
    Ok(arena.alloc(Node::BinaryOp { left:  first,
                                    op:    BinaryOperator::Pow,
                                    right: exponent,
                                    position }))
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is one of `+ - * / ^` and
/// `None` for literals and parentheses.
///
/// # Example
/// ```
/// use expression_solver::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Integer(_) | Token::LParen | Token::RParen => None,
    }
}
