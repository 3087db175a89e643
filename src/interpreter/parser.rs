/// Parser entry points and shared result type.
///
/// Checks the token stream as a whole (empty input, leftover tokens) and
/// hands the structural work to the precedence tiers.
pub mod core;

/// Binary operator tiers.
///
/// One function per precedence level, lowest first: additive, multiplicative
/// and exponent.
pub mod binary;

/// Primary expressions.
///
/// Integer literals and parenthesized groups.
pub mod primary;

/// Token rewrites applied before structural parsing.
///
/// Makes implicit multiplication and the implicit left operand of a leading
/// minus explicit in the token stream.
pub mod normalize;
