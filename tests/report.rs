use std::io::{self, Write};

use clap::ValueEnum;
use expression_solver::report::{LogLevel, Reporter, format_result};

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("reporter writes UTF-8")
}

#[test]
fn result_line_echoes_the_expression() {
    assert_eq!(format_result("1 + 1", 2), "1 + 1 = 2");
    assert_eq!(format_result("(2 - 4)(9 * 0)", 0), "(2 - 4)(9 * 0) = 0");
}

#[test]
fn info_level_prints_only_the_result() {
    let mut reporter = Reporter::new(LogLevel::Info, Vec::new(), Some(Vec::new()));
    assert_eq!(reporter.solve("(1+2)*3").unwrap(), 9);

    let (console, log) = reporter.into_inner();
    assert_eq!(text(console), "(1+2)*3 = 9\n\n");
    assert_eq!(text(log.unwrap()), "");
}

#[test]
fn debug_level_logs_every_step() {
    let mut reporter = Reporter::new(LogLevel::Debug, Vec::new(), Some(Vec::new()));
    assert_eq!(reporter.solve("1+1").unwrap(), 2);

    let (console, log) = reporter.into_inner();
    let records = "DEBUG:solver:Running equation solver.\n\
                   DEBUG:solver:Solve equation: \"1+1\"\n\
                   DEBUG:parser:Parsed \"1+1\", operations: 1\n\
                   DEBUG:evaluator:Solving addition: \"1+1\" equals \"2\"\n\
                   DEBUG:solver:Displaying results.\n";
    assert_eq!(text(console), format!("{records}1+1 = 2\n\n"));
    assert_eq!(text(log.unwrap()), records);
}

#[test]
fn trace_records_name_the_operation() {
    let mut reporter = Reporter::new(LogLevel::Debug, Vec::new(), None::<Vec<u8>>);
    reporter.solve("2^3^2").unwrap();

    let (console, _) = reporter.into_inner();
    let console = text(console);
    assert!(console.contains("DEBUG:evaluator:Solving exponentiation: \"3^2\" equals \"9\"\n"));
    assert!(console.contains("DEBUG:evaluator:Solving exponentiation: \"2^9\" equals \"512\"\n"));
}

#[test]
fn parse_record_shows_the_normalized_tree() {
    let mut reporter = Reporter::new(LogLevel::Debug, Vec::new(), None::<Vec<u8>>);
    reporter.solve("(2 - 4)(9 * 0)").unwrap();

    let (console, _) = reporter.into_inner();
    assert!(text(console).contains("DEBUG:parser:Parsed \"(2-4)*(9*0)\", operations: 3\n"));
}

#[test]
fn failures_are_logged_as_errors() {
    let mut reporter = Reporter::new(LogLevel::Warning, Vec::new(), Some(Vec::new()));
    assert!(reporter.solve("5/0").is_err());
    assert_eq!(reporter.solve("2+2").unwrap(), 4);

    let (console, log) = reporter.into_inner();
    let record = "ERROR:solver:\"5/0\": Error at position 1: Division by zero.\n";
    assert_eq!(text(console), format!("{record}2+2 = 4\n\n"));
    assert_eq!(text(log.unwrap()), record);
}

#[test]
fn write_failures_do_not_stop_solving() {
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("broken"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let mut reporter = Reporter::new(LogLevel::Info, Broken, None::<Vec<u8>>);
    assert_eq!(reporter.solve("6*7").unwrap(), 42);
    assert!(reporter.take_error().is_some());
    assert!(reporter.take_error().is_none());
}

#[test]
fn log_levels_are_ordered_and_parse_from_the_command_line() {
    assert!(LogLevel::Debug < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Warning);
    assert!(LogLevel::Warning < LogLevel::Error);

    assert_eq!(LogLevel::from_str("debug", true), Ok(LogLevel::Debug));
    assert_eq!(LogLevel::from_str("INFO", true), Ok(LogLevel::Info));
    assert_eq!(LogLevel::from_str("warn", true), Ok(LogLevel::Warning));
    assert_eq!(LogLevel::from_str("Warning", true), Ok(LogLevel::Warning));
    assert!(LogLevel::from_str("verbose", true).is_err());

    assert_eq!(LogLevel::Warning.to_string(), "WARNING");
}
