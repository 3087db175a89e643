use std::{fs, path::Path, thread};

use expression_solver::{
    error::EvalError,
    evaluate, evaluate_traced, evaluate_with, parse_expression_str,
    trace::{Trace, TraceSink},
};
use walkdir::WalkDir;

#[test]
fn case_files_evaluate_as_expected() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (expression, expected) =
                line.split_once("=>")
                    .unwrap_or_else(|| panic!("{path:?} line {}: missing '=>'", i + 1));
            count += 1;
            check_case(expression.trim(), expected.trim(), path, i + 1);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn check_case(expression: &str, expected: &str, path: &Path, line: usize) {
    let result = evaluate(expression);
    let matched = match expected {
        "lex" => matches!(result, Err(EvalError::Lex(_))),
        "parse" => matches!(result, Err(EvalError::Parse(_))),
        "runtime" => matches!(result, Err(EvalError::Runtime(_))),
        value => {
            let value: i64 =
                value.parse()
                     .unwrap_or_else(|_| panic!("{path:?} line {line}: bad expectation {value}"));
            result == Ok(value)
        },
    };
    assert!(matched,
            "{path:?} line {line}: `{expression}` expected {expected}, got {result:?}");
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("1+2*3", 7);
    assert_value("(1+2)*3", 9);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2^3^2", 512);
    assert_value("2^(3^2)", 512);
    assert_value("(2^3)^2", 64);
}

#[test]
fn implicit_multiplication() {
    assert_value("4(9/1)", 36);
    assert_value("(2-4)(9*0)", 0);
    assert_value("4^3(9/1)", 576);
}

#[test]
fn sums_ignore_whitespace() {
    let literals = [3, 14, 15, 92, 65, 35, 897, 9];
    let expected: i64 = literals.iter().sum();
    let separators = ["+", " + ", "\t+", "+\n", "  +  "];

    for (shift, _) in separators.iter().enumerate() {
        let mut src = String::from(" ");
        for (i, literal) in literals.iter().enumerate() {
            if i > 0 {
                src.push_str(separators[(i + shift) % separators.len()]);
            }
            src.push_str(&literal.to_string());
        }
        src.push('\t');
        assert_value(&src, expected);
    }
}

#[test]
fn negative_zero_reports_zero() {
    assert_value("(0-0)*(0-5)", 0);
    assert_value("(0-3)*0", 0);
    assert_value("0/(0-7)", 0);
    assert_eq!(evaluate("(0-3)*0").unwrap().to_string(), "0");
}

#[test]
fn division_by_zero_returns_an_error() {
    assert!(evaluate("5/0").is_err_and(|e| e.is_runtime()));
}

#[test]
fn trace_follows_evaluation_order() {
    let (value, trace) = evaluate_traced("2^3^2").unwrap();
    assert_eq!(value, 512);

    let steps: Vec<String> = trace.iter().map(ToString::to_string).collect();
    assert_eq!(steps, ["3^2 = 9", "2^9 = 512"]);
}

#[test]
fn trace_has_one_step_per_operator() {
    let (_, trace) = evaluate_traced("(2 * 4) * 2 + (9 * 0)").unwrap();
    let steps: Vec<String> = trace.iter().map(|e| e.expression()).collect();
    assert_eq!(steps, ["2*4", "8*2", "9*0", "16+0"]);

    let (_, trace) = evaluate_traced("42").unwrap();
    assert!(trace.is_empty());
}

#[test]
fn reevaluation_gives_identical_trace() {
    let src = "(1 * 4) + (5 * 2) - 2^3(9/1)";
    let first = evaluate_traced(src).unwrap();
    let second = evaluate_traced(src).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.0, -58);
}

#[test]
fn failed_evaluation_keeps_completed_steps() {
    let mut trace = Trace::new();
    let result = evaluate_with("(1+2)*(3/0)", &mut trace);

    assert!(result.is_err());
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.entries()[0].value, 3);
}

#[test]
fn custom_sink_receives_steps() {
    struct Counter(usize);

    impl TraceSink for Counter {
        fn record(&mut self, _entry: expression_solver::trace::TraceEntry) {
            self.0 += 1;
        }
    }

    let mut counter = Counter(0);
    assert_eq!(evaluate_with("1+2+3+4", &mut counter).unwrap(), 10);
    assert_eq!(counter.0, 3);
}

#[test]
fn independent_evaluations_run_concurrently() {
    let sources = ["1+2*3", "2^3^2", "4(9/1)", "(2-4)(9*0)", "4^3(9/1)"];
    let expected = [7, 512, 36, 0, 576];

    let results: Vec<_> = thread::scope(|scope| {
                              let handles: Vec<_> =
                                  sources.iter()
                                         .map(|src| scope.spawn(move || evaluate_traced(src)))
                                         .collect();
                              handles.into_iter().map(|h| h.join().unwrap()).collect()
                          });

    for ((src, result), value) in sources.iter().zip(results).zip(expected) {
        let (got, trace) = result.unwrap();
        assert_eq!(got, value, "`{src}`");
        assert_eq!(evaluate_traced(src).unwrap().1, trace);
    }
}

fn chain(operator: &str, operand: &str, operands: usize) -> String {
    vec![operand; operands].join(operator)
}

#[test]
fn long_sums_evaluate_without_recursion() {
    let source = chain("+", "1", 200_000);

    assert_eq!(evaluate(&source).unwrap(), 200_000);

    let (value, trace) = evaluate_traced(&source).unwrap();
    assert_eq!(value, 200_000);
    assert_eq!(trace.len(), 199_999);
    assert_eq!(trace.entries().last().unwrap().to_string(), "199999+1 = 200000");
}

#[test]
fn long_chains_of_every_operator() {
    assert_eq!(evaluate(&chain("-", "1", 100_000)).unwrap(), 1 - 99_999);
    assert_eq!(evaluate(&chain("*", "1", 100_000)).unwrap(), 1);
    assert_eq!(evaluate(&chain("/", "1", 100_000)).unwrap(), 1);
    assert_eq!(evaluate(&chain("^", "1", 100_000)).unwrap(), 1);
    assert_eq!(evaluate(&chain("+", "(1)", 100_000)).unwrap(), 100_000);
    assert_eq!(evaluate(&chain("", "(1)", 100_000)).unwrap(), 1);
}

#[test]
fn long_exponent_chains_keep_right_grouping() {
    let source = format!("2^{}", chain("^", "1", 50_000));
    let (value, trace) = evaluate_traced(&source).unwrap();

    assert_eq!(value, 2);
    assert_eq!(trace.len(), 50_000);
    assert_eq!(trace.entries().last().unwrap().to_string(), "2^1 = 2");
}

#[test]
fn long_trees_print_and_drop() {
    let source = chain("-", "7", 100_000);
    let expr = parse_expression_str(&source).unwrap();

    assert_eq!(expr.operation_count(), 99_999);
    assert_eq!(expr.len(), 199_999);
    assert_eq!(expr.to_string(), source);
    drop(expr);
}
