use std::error::Error;

use expression_solver::{
    error::{EvalError, LexError, ParseError, RuntimeError},
    evaluate,
    interpreter::parser::core::MAX_NESTING_DEPTH,
};

fn parse_error(src: &str) -> ParseError {
    match evaluate(src) {
        Err(EvalError::Parse(e)) => e,
        other => panic!("`{src}` should fail to parse, got {other:?}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match evaluate(src) {
        Err(EvalError::Runtime(e)) => e,
        other => panic!("`{src}` should fail at runtime, got {other:?}"),
    }
}

#[test]
fn invalid_characters_are_lex_errors() {
    assert_eq!(evaluate("1@2"),
               Err(EvalError::Lex(LexError::InvalidCharacter { character: '@',
                                                               position:  1, })));
    // Positions refer to the whitespace-stripped text.
    assert_eq!(evaluate("1 + x"),
               Err(EvalError::Lex(LexError::InvalidCharacter { character: 'x',
                                                               position:  2, })));
}

#[test]
fn oversized_literals_are_lex_errors() {
    let err = evaluate("1+99999999999999999999").unwrap_err();
    assert_eq!(err,
               EvalError::Lex(LexError::LiteralTooLarge { literal:  "99999999999999999999".to_string(),
                                                          position: 2, }));
}

#[test]
fn empty_input_is_a_parse_error() {
    assert_eq!(parse_error(""), ParseError::EmptyExpression);
    assert_eq!(parse_error(" \t "), ParseError::EmptyExpression);
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(parse_error("(1+2"), ParseError::ExpectedClosingParen { position: 0 });
    assert_eq!(parse_error("2*(1+(2*3)"), ParseError::ExpectedClosingParen { position: 2 });
    assert_eq!(parse_error("1+2)"), ParseError::UnmatchedClosingParen { position: 3 });
    assert_eq!(parse_error(")"), ParseError::UnmatchedClosingParen { position: 0 });
}

#[test]
fn empty_group() {
    assert_eq!(parse_error("()"), ParseError::EmptyGroup { position: 0 });
    assert_eq!(parse_error("3+(())"), ParseError::EmptyGroup { position: 3 });
}

#[test]
fn missing_operands() {
    assert_eq!(parse_error("1+"),
               ParseError::MissingOperand { operator: '+',
                                            position: 1, });
    assert_eq!(parse_error("(1+)"),
               ParseError::MissingOperand { operator: '+',
                                            position: 2, });
    assert_eq!(parse_error("2^"),
               ParseError::MissingOperand { operator: '^',
                                            position: 1, });
}

#[test]
fn consecutive_operators() {
    assert_eq!(parse_error("1+*2"),
               ParseError::ConsecutiveOperators { first:    '+',
                                                  second:   '*',
                                                  position: 2, });
    assert_eq!(parse_error("2*-3"),
               ParseError::ConsecutiveOperators { first:    '*',
                                                  second:   '-',
                                                  position: 2, });
}

#[test]
fn misplaced_tokens() {
    assert_eq!(parse_error("(2)3"),
               ParseError::UnexpectedToken { token:    "3".to_string(),
                                             position: 3, });
    assert_eq!(parse_error("*2"),
               ParseError::UnexpectedToken { token:    "*".to_string(),
                                             position: 0, });
}

fn nested(levels: usize) -> String {
    format!("{}1{}", "(".repeat(levels), ")".repeat(levels))
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    assert_eq!(evaluate(&nested(MAX_NESTING_DEPTH)), Ok(1));
    assert_eq!(evaluate(&format!("2*{}", nested(MAX_NESTING_DEPTH))), Ok(2));
}

#[test]
fn nesting_beyond_the_limit_is_rejected() {
    let too_deep = ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                position: MAX_NESTING_DEPTH, };

    assert_eq!(parse_error(&nested(MAX_NESTING_DEPTH + 1)), too_deep);
    assert_eq!(parse_error(&nested(100_000)), too_deep);
    assert_eq!(parse_error(&"(".repeat(100_000)), too_deep);

    assert_eq!(too_deep.to_string(),
               "Error at position 128: Parentheses are nested more than 128 levels deep.");
}

#[test]
fn runtime_failures() {
    assert_eq!(runtime_error("5/0"), RuntimeError::DivisionByZero { position: 1 });
    assert_eq!(runtime_error("2^(0-1)"),
               RuntimeError::InvalidExponent { exponent: -1,
                                               position: 1, });
    assert_eq!(runtime_error("9223372036854775807+1"),
               RuntimeError::Overflow { position: 19 });
    assert_eq!(runtime_error("3^41"), RuntimeError::Overflow { position: 1 });
}

#[test]
fn error_messages_and_sources() {
    let err = evaluate("5/0").unwrap_err();
    assert_eq!(err.to_string(), "Error at position 1: Division by zero.");
    assert!(err.source().is_some());
    assert!(err.is_runtime() && !err.is_parse() && !err.is_lex());

    let err = evaluate("(1+2").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 0: Expected closing parenthesis ')' but none found.");
    assert!(err.is_parse());

    let err = evaluate("1@2").unwrap_err();
    assert_eq!(err.to_string(), "Error at position 1: Invalid character '@'.");
    assert!(err.is_lex());
}
