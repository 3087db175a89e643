/// The evaluator module computes the integer value of a syntax tree.
///
/// The evaluator walks the AST post-order, applies checked integer arithmetic
/// to every binary node, and reports each reduction step to an injected trace
/// sink.
///
/// # Responsibilities
/// - Evaluates literals and the five binary operators.
/// - Applies truncating division and non-negative integer exponents.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer strips whitespace and produces a stream of positioned tokens:
/// integers, the five operators and parentheses. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Reads multi-digit integer literals as single tokens.
/// - Reports lexical errors for invalid characters or oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser makes implicit multiplication explicit, then runs a tiered
/// recursive descent that encodes operator precedence and associativity in
/// the shape of the tree.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar, reporting errors with position info.
/// - Handles parentheses, implicit multiplication and a leading minus.
/// - Bounds parenthesis nesting to keep recursion shallow.
pub mod parser;
