use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Safely converts an `i64` exponent to the `u32` expected by
/// [`i64::checked_pow`].
///
/// ## Errors
/// - `RuntimeError::InvalidExponent` if the value is negative.
/// - `RuntimeError::Overflow` if the value exceeds `u32::MAX`; any base other
///   than `0`, `1` or `-1` overflows `i64` long before that.
///
/// ## Parameters
/// - `value`: The exponent to convert.
/// - `position`: Position of the `^` operator for error reporting.
///
/// ## Example
/// ```
/// use expression_solver::{error::RuntimeError, util::num::i64_to_u32_exponent};
///
/// assert_eq!(i64_to_u32_exponent(45, 5).unwrap(), 45);
///
/// let err = i64_to_u32_exponent(-1, 5).unwrap_err();
/// assert!(matches!(err,
///                  RuntimeError::InvalidExponent { exponent: -1,
///                                                  position: 5, }));
///
/// let err = i64_to_u32_exponent(i64::MAX, 11).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { position: 11 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub const fn i64_to_u32_exponent(value: i64, position: usize) -> EvalResult<u32> {
    if value < 0 {
        return Err(RuntimeError::InvalidExponent { exponent: value,
                                                   position });
    }

    if value > u32::MAX as i64 {
        return Err(RuntimeError::Overflow { position });
    }
    Ok(value as u32)
}
