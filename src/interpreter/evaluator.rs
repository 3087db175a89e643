/// Core evaluation logic.
///
/// Contains the evaluator, which walks the tree post-order and reports each
/// reduction to its trace sink, and the shared result type.
pub mod core;

/// Binary operator evaluation logic.
///
/// Checked integer arithmetic for `+ - * /` and exponentiation.
pub mod binary;
