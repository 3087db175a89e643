/// Numeric conversion helpers.
///
/// Checked narrowing between the integer widths used by the evaluator, so
/// that an out-of-range value becomes a typed error instead of a silent
/// truncation.
pub mod num;
