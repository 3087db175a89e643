use crate::ast::BinaryOperator;

/// One reduction step: a binary operation whose operands were already
/// reduced to integers, and the integer it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEntry {
    /// Value of the left operand.
    pub left:  i64,
    /// The operator applied.
    pub op:    BinaryOperator,
    /// Value of the right operand.
    pub right: i64,
    /// The result of `left op right`.
    pub value: i64,
}

impl TraceEntry {
    /// The reduced sub-expression as text, such as `"2^9"`.
    ///
    /// ```
    /// use expression_solver::{ast::BinaryOperator, trace::TraceEntry};
    ///
    /// let entry = TraceEntry { left:  2,
    ///                          op:    BinaryOperator::Pow,
    ///                          right: 9,
    ///                          value: 512, };
    /// assert_eq!(entry.expression(), "2^9");
    /// assert_eq!(entry.to_string(), "2^9 = 512");
    /// ```
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{}{}{}", self.left, self.op, self.right)
    }
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{} = {}", self.left, self.op, self.right, self.value)
    }
}

/// Receives reduction steps as the evaluator produces them.
///
/// The sink is handed to the evaluator by the caller, so where the steps end
/// up (a vector, a log file, nowhere) is the caller's decision.
pub trait TraceSink {
    /// Appends one step.
    fn record(&mut self, entry: TraceEntry);
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn record(&mut self, entry: TraceEntry) {
        (**self).record(entry);
    }
}

/// A sink that drops every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _entry: TraceEntry) {}
}

/// An ordered, append-only list of reduction steps.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// The recorded steps, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no step was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the recorded steps, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceEntry> {
        self.entries.iter()
    }
}

impl TraceSink for Trace {
    fn record(&mut self, entry: TraceEntry) {
        self.entries.push(entry);
    }
}

impl IntoIterator for Trace {
    type IntoIter = std::vec::IntoIter<TraceEntry>;
    type Item = TraceEntry;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type IntoIter = std::slice::Iter<'a, TraceEntry>;
    type Item = &'a TraceEntry;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
