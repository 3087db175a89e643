use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// All operations are checked; a result outside the `i64` range is an
    /// error rather than a wrapped value. Division truncates toward zero, so
    /// `7 / 2` is `3` and `-7 / 2` is `-3`. The operator must be one of
    /// `Add`, `Sub`, `Mul` or `Div`; other operators are not processed here.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Operator position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use expression_solver::{
    ///     ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// assert_eq!(Evaluator::eval_scalar_op(BinaryOperator::Div, -7, 2, 1).unwrap(),
    ///            -3);
    ///
    /// let err = Evaluator::eval_scalar_op(BinaryOperator::Div, 5, 0, 1).unwrap_err();
    /// assert_eq!(err, RuntimeError::DivisionByZero { position: 1 });
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: i64,
                          right: i64,
                          position: usize)
                          -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                left.checked_div(right)
            },
            Pow => return Self::eval_pow(left, right, position),
        };

        result.ok_or(RuntimeError::Overflow { position })
    }
}
