use std::{
    fmt,
    fs::File,
    io::{self, Stdout, Write},
};

use crate::{
    error::EvalError,
    interpreter::evaluator::core::Evaluator,
    parse_expression_str,
    trace::{TraceEntry, TraceSink},
};

/// Formats the line shown to the user for a solved expression.
///
/// The expression is echoed exactly as it was typed.
///
/// ```
/// use expression_solver::report::format_result;
///
/// assert_eq!(format_result("(3 + 4) * 6", 42), "(3 + 4) * 6 = 42");
/// ```
#[must_use]
pub fn format_result(expression: &str, result: i64) -> String {
    format!("{expression} = {result}")
}

/// Severity of a log record. Records below the reporter's level are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum LogLevel {
    /// Every reduction step and internal progress message.
    Debug,
    /// Normal operation.
    Info,
    /// Something unusual that did not stop evaluation.
    #[value(alias = "warn")]
    Warning,
    /// An expression could not be solved.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

/// Writes results to a console and leveled log records to the console and an
/// optional log file.
///
/// Records use the `LEVEL:target:message` layout. A `Reporter` is also a
/// [`TraceSink`]: each reduction step becomes a `DEBUG` record under the
/// `evaluator` target.
///
/// Write failures do not interrupt evaluation; the first one is kept and can
/// be collected with [`Reporter::take_error`].
pub struct Reporter<C: Write = Stdout, F: Write = File> {
    level:    LogLevel,
    console:  C,
    log_file: Option<F>,
    error:    Option<io::Error>,
}

impl Reporter {
    /// Creates a reporter writing to standard output and, if given, to
    /// `log_file`.
    #[must_use]
    pub fn stdout(level: LogLevel, log_file: Option<File>) -> Self {
        Self::new(level, io::stdout(), log_file)
    }
}

impl<C: Write, F: Write> Reporter<C, F> {
    /// Creates a reporter over arbitrary writers.
    pub fn new(level: LogLevel, console: C, log_file: Option<F>) -> Self {
        Self { level,
               console,
               log_file,
               error: None }
    }

    /// Writes a log record if `level` is at or above the reporter's level.
    ///
    /// # Example
    /// ```
    /// use expression_solver::report::{LogLevel, Reporter};
    ///
    /// let mut reporter = Reporter::new(LogLevel::Info, Vec::new(), None::<Vec<u8>>);
    /// reporter.log(LogLevel::Debug, "solver", "hidden");
    /// reporter.log(LogLevel::Info, "solver", "shown");
    ///
    /// let (console, _) = reporter.into_inner();
    /// assert_eq!(String::from_utf8(console).unwrap(), "INFO:solver:shown\n");
    /// ```
    pub fn log(&mut self, level: LogLevel, target: &str, message: &str) {
        if level < self.level {
            return;
        }
        let record = format!("{level}:{target}:{message}");
        let console = writeln!(self.console, "{record}");
        self.keep_error(console);
        if let Some(file) = self.log_file.as_mut() {
            let written = writeln!(file, "{record}");
            self.keep_error(written);
        }
    }

    /// Solves one expression, printing `expr = result` followed by a blank
    /// line to the console.
    ///
    /// Progress, the size of the parsed tree and every reduction step are
    /// logged at `DEBUG`; a failure is logged at `ERROR` and returned.
    ///
    /// # Example
    /// ```
    /// use expression_solver::report::{LogLevel, Reporter};
    ///
    /// let mut reporter = Reporter::new(LogLevel::Info, Vec::new(), None::<Vec<u8>>);
    /// assert_eq!(reporter.solve("4(9 / 1)").unwrap(), 36);
    ///
    /// let (console, _) = reporter.into_inner();
    /// assert_eq!(String::from_utf8(console).unwrap(), "4(9 / 1) = 36\n\n");
    /// ```
    pub fn solve(&mut self, expression: &str) -> Result<i64, EvalError> {
        self.log(LogLevel::Debug, "solver", "Running equation solver.");
        self.log(LogLevel::Debug, "solver", &format!("Solve equation: \"{expression}\""));

        match self.solve_logged(expression) {
            Ok(result) => {
                self.log(LogLevel::Debug, "solver", "Displaying results.");
                let shown = writeln!(self.console, "{}\n", format_result(expression, result));
                self.keep_error(shown);
                Ok(result)
            },
            Err(e) => {
                self.log(LogLevel::Error, "solver", &format!("\"{expression}\": {e}"));
                Err(e)
            },
        }
    }

    fn solve_logged(&mut self, expression: &str) -> Result<i64, EvalError> {
        let expr = parse_expression_str(expression)?;
        if self.level <= LogLevel::Debug {
            let message = format!("Parsed \"{expr}\", operations: {}", expr.operation_count());
            self.log(LogLevel::Debug, "parser", &message);
        }
        Ok(Evaluator::new(&mut *self).eval(&expr)?)
    }

    /// Returns the first write failure since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Flushes the console and the log file.
    pub fn flush(&mut self) -> io::Result<()> {
        self.console.flush()?;
        if let Some(file) = self.log_file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    /// Consumes the reporter and returns its writers.
    pub fn into_inner(self) -> (C, Option<F>) {
        (self.console, self.log_file)
    }

    fn keep_error(&mut self, result: io::Result<()>) {
        if let Err(e) = result
           && self.error.is_none()
        {
            self.error = Some(e);
        }
    }
}

impl<C: Write, F: Write> TraceSink for Reporter<C, F> {
    fn record(&mut self, entry: TraceEntry) {
        if self.level > LogLevel::Debug {
            return;
        }
        let message = format!("Solving {}: \"{}\" equals \"{}\"",
                              entry.op.name(),
                              entry.expression(),
                              entry.value);
        self.log(LogLevel::Debug, "evaluator", &message);
    }
}
