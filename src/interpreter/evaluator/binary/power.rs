use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    util::num::i64_to_u32_exponent,
};

impl Evaluator<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Exponents must be non-negative. Any base raised to `0` is `1`,
    /// including `0 ^ 0`. Bases `0`, `1` and `-1` are computed in closed form
    /// so that huge exponents do not overflow; every other base uses checked
    /// exponentiation.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `position`: Position of `^` for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use expression_solver::{error::RuntimeError, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_pow(2, 10, 1).unwrap(), 1024);
    /// assert_eq!(Evaluator::eval_pow(-1, 9_999_999_999, 1).unwrap(), -1);
    /// assert!(matches!(Evaluator::eval_pow(2, -1, 1),
    ///                  Err(RuntimeError::InvalidExponent { .. })));
    /// assert!(matches!(Evaluator::eval_pow(2, 64, 1),
    ///                  Err(RuntimeError::Overflow { .. })));
    /// ```
    pub fn eval_pow(base: i64, exponent: i64, position: usize) -> EvalResult<i64> {
        if exponent < 0 {
            return Err(RuntimeError::InvalidExponent { exponent, position });
        }

        match (base, exponent) {
            (_, 0) | (1, _) => Ok(1),
            (0, _) => Ok(0),
            (-1, e) => Ok(if e % 2 == 0 { 1 } else { -1 }),
            (b, e) => b.checked_pow(i64_to_u32_exponent(e, position)?)
                       .ok_or(RuntimeError::Overflow { position }),
        }
    }
}
