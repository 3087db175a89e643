/// Operator dispatch.
pub mod core;

/// Addition, subtraction, multiplication and truncating division.
pub mod scalar;

/// Exponentiation with non-negative integer exponents.
pub mod power;
