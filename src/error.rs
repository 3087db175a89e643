/// Lexing errors.
///
/// Raised while scanning the source text, before any structure is known:
/// characters outside the expression alphabet and literals too large for the
/// integer type.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// unbalanced parentheses, missing operands, consecutive operators and empty
/// groups.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: division by
/// zero, negative exponents and integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure produced by a single call to [`crate::evaluate`].
///
/// Each phase reports through its own error type; this enum wraps them so
/// callers can match on the phase or just print the message.
pub enum EvalError {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a well-formed expression.
    Parse(ParseError),
    /// The expression is well-formed but cannot be computed.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Returns `true` if the failure happened while tokenizing.
    #[must_use]
    pub const fn is_lex(&self) -> bool {
        matches!(self, Self::Lex(_))
    }

    /// Returns `true` if the failure happened while parsing.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns `true` if the failure happened while evaluating.
    #[must_use]
    pub const fn is_runtime(&self) -> bool {
        matches!(self, Self::Runtime(_))
    }
}

impl From<LexError> for EvalError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
