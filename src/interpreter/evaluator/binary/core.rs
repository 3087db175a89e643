use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two integers.
    ///
    /// This function routes the operation to specialized handlers: the four
    /// arithmetic operators go to `eval_scalar_op`, exponentiation to
    /// `eval_pow`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Operator position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use expression_solver::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add, 3, 4, 0);
    /// assert_eq!(result.unwrap(), 7);
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Pow, 2, 10, 0);
    /// assert_eq!(result.unwrap(), 1024);
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: i64,
                       right: i64,
                       position: usize)
                       -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right, position),
            Pow => Self::eval_pow(left, right, position),
        }
    }
}
