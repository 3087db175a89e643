use std::{fs, fs::OpenOptions, path::PathBuf, process::ExitCode};

use clap::{ArgGroup, Parser};
use expression_solver::report::{LogLevel, Reporter};

/// expression-solver evaluates integer arithmetic expressions built from
/// `+ - * / ^` and parentheses, logging every reduction step.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["expr", "file"])))]
struct Args {
    /// Expression to solve, such as "(1 + 2) * 3".
    #[arg(short, long, allow_hyphen_values = true)]
    expr: Option<String>,

    /// Solves every line of a file instead of a single expression. Blank lines
    /// and lines starting with '#' are skipped.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Minimum level of the log records to write.
    #[arg(long, alias = "logLevel", value_enum, ignore_case = true, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// File that log records are appended to.
    #[arg(long, alias = "logFile", default_value = "expressionSolver.log")]
    log_file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_file = match OpenOptions::new().create(true).append(true).open(&args.log_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open the log file '{}': {e}", args.log_file.display());
            return ExitCode::FAILURE;
        },
    };
    let mut reporter = Reporter::stdout(args.log_level, Some(log_file));

    let expressions = if let Some(path) = &args.file {
        match fs::read_to_string(path) {
            Ok(contents) => contents.lines()
                                    .map(str::trim)
                                    .filter(|line| !line.is_empty() && !line.starts_with('#'))
                                    .map(str::to_string)
                                    .collect(),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.expr.into_iter().collect::<Vec<_>>()
    };

    let failures = expressions.iter()
                              .filter(|expression| reporter.solve(expression).is_err())
                              .count();

    if let Err(e) = reporter.flush() {
        eprintln!("Failed to write output: {e}");
    }
    if let Some(e) = reporter.take_error() {
        eprintln!("Failed to write output: {e}");
        return ExitCode::FAILURE;
    }

    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
