#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Position of the `/` operator.
        position: usize,
    },
    /// The right-hand side of `^` evaluated to a negative number.
    InvalidExponent {
        /// The exponent that was computed.
        exponent: i64,
        /// Position of the `^` operator.
        position: usize,
    },
    /// Arithmetic operation overflowed a signed 64-bit integer.
    Overflow {
        /// Position of the operator whose result overflowed.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::InvalidExponent { exponent, position } => write!(f,
                                                                   "Error at position {position}: Exponent {exponent} is negative; only non-negative integer exponents are supported."),
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
