#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning source text into tokens.
pub enum LexError {
    /// Found a character that is not a digit, an operator or a parenthesis.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset in the whitespace-stripped expression.
        position:  usize,
    },
    /// An integer literal does not fit in a signed 64-bit integer.
    LiteralTooLarge {
        /// The digits as written.
        literal:  String,
        /// Byte offset in the whitespace-stripped expression.
        position: usize,
    },
}

impl LexError {
    /// Byte offset of the failure in the whitespace-stripped expression.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at position {position}: Invalid character '{character}'.")
            },
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at position {position}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
