#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all structural errors found while building the syntax tree.
///
/// Every variant carries the byte offset, in the whitespace-stripped
/// expression, of the token where the problem was detected.
pub enum ParseError {
    /// The expression contains no tokens at all.
    EmptyExpression,
    /// Found a token that cannot appear at this point.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Position of the unmatched `(`.
        position: usize,
    },
    /// A closing parenthesis `)` has no matching `(`.
    UnmatchedClosingParen {
        /// Position of the stray `)`.
        position: usize,
    },
    /// A parenthesized group `()` contains nothing.
    EmptyGroup {
        /// Position of the `(`.
        position: usize,
    },
    /// An operator is missing its right-hand operand.
    MissingOperand {
        /// The operator symbol.
        operator: char,
        /// Position of the operator.
        position: usize,
    },
    /// Two binary operators follow each other, as in `1+*2`.
    ConsecutiveOperators {
        /// The first operator symbol.
        first:    char,
        /// The second operator symbol.
        second:   char,
        /// Position of the second operator.
        position: usize,
    },
    /// Parentheses are nested more deeply than the parser accepts.
    NestingTooDeep {
        /// The maximum number of groups that may be open at once.
        limit:    usize,
        /// Position of the first `(` beyond the limit.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: Expression is empty."),

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::UnmatchedClosingParen { position } => write!(f,
                                                               "Error at position {position}: Closing parenthesis ')' has no matching '('."),

            Self::EmptyGroup { position } => {
                write!(f, "Error at position {position}: Parentheses enclose nothing.")
            },

            Self::MissingOperand { operator, position } => write!(f,
                                                                  "Error at position {position}: Operator '{operator}' is missing an operand."),

            Self::ConsecutiveOperators { first,
                                         second,
                                         position, } => write!(f,
                                                               "Error at position {position}: Operator '{second}' cannot follow '{first}'."),

            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at position {position}: Parentheses are nested more than {limit} levels deep."),
        }
    }
}

impl std::error::Error for ParseError {}
