use crate::{
    ast::{Expr, Node},
    error::RuntimeError,
    trace::{TraceEntry, TraceSink},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks a syntax tree and computes its integer value.
///
/// ## Usage
///
/// An `Evaluator` borrows the trace sink for its lifetime. Create one per
/// expression; it holds no other state, so nothing leaks between
/// evaluations.
pub struct Evaluator<'s> {
    sink: &'s mut dyn TraceSink,
}

impl<'s> Evaluator<'s> {
    /// Creates an evaluator that reports reduction steps to `sink`.
    #[must_use]
    pub fn new(sink: &'s mut dyn TraceSink) -> Self {
        Self { sink }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Both operands of a binary node are reduced before the node itself, left
    /// first, and every successful reduction is recorded in the sink. A
    /// failing reduction records nothing and stops the walk.
    ///
    /// # Example
    /// ```
    /// use expression_solver::{
    ///     interpreter::evaluator::core::Evaluator, parse_expression_str, trace::Trace,
    /// };
    ///
    /// let expr = parse_expression_str("(1+2)*3").unwrap();
    /// let mut trace = Trace::new();
    /// let value = Evaluator::new(&mut trace).eval(&expr).unwrap();
    ///
    /// assert_eq!(value, 9);
    /// let steps: Vec<String> = trace.iter().map(ToString::to_string).collect();
    /// assert_eq!(steps, ["1+2 = 3", "3*3 = 9"]);
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<i64> {
        // Nodes come children first, so both operands are already reduced
        // when a binary node is reached.
        let mut values = Vec::with_capacity(expr.len());
        for (_, node) in expr.nodes() {
            let value = match *node {
                Node::Literal { value, .. } => value,
                Node::BinaryOp { left,
                                 op,
                                 right,
                                 position, } => {
                    let left = values[left.index()];
                    let right = values[right.index()];
                    let value = Self::eval_binary(op, left, right, position)?;

                    self.sink.record(TraceEntry { left,
                                                  op,
                                                  right,
                                                  value });
                    value
                },
            };
            values.push(value);
        }

        Ok(values[expr.root().index()])
    }
}
