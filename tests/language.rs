use std::fs;

use abacus::{
    error::{Error, ParseError, RuntimeError},
    evaluate, evaluate_expression,
    util::approx::approx_eq,
};
use walkdir::WalkDir;

/// Runs every `tests/cases/*.calc` file.
///
/// Each non-empty, non-comment line has the form `<expression> => <expected>`,
/// where `<expected>` is a number or `error`.
#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (source, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let result = evaluate_expression(&source);
            match (expected.as_str(), result) {
                ("error", Err(_)) => {},
                ("error", Ok(v)) => {
                    panic!("Case {} in {:?} ({source}) evaluated to {v} but should fail",
                           i + 1,
                           path)
                },
                (number, Ok(v)) => {
                    let want: f64 = number.parse()
                                          .unwrap_or_else(|_| panic!("Bad expectation {number}"));
                    assert!(approx_eq(v, want),
                            "Case {} in {:?} ({source}): expected {want}, got {v}",
                            i + 1,
                            path);
                },
                (_, Err(e)) => panic!("Case {} in {:?} ({source}) failed:\nError: {e}", i + 1, path),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with("//"))
           .filter_map(|line| line.split_once("=>"))
           .map(|(source, expected)| (source.trim().to_string(), expected.trim().to_string()))
           .collect()
}

fn assert_value(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(v) => assert!(approx_eq(v, expected), "{src}: expected {expected}, got {v}"),
        Err(e) => panic!("Expression failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if evaluate_expression(src).is_ok() {
        panic!("Expression succeeded but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("8 / 4 / 2", 1.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("-(2 + 3) * 0.5", -2.5);
    assert_value("2 * -3", -6.0);
}

#[test]
fn real_literals() {
    assert_value("0.1 + 0.2", 0.3);
    assert_value(".5 * 4", 2.0);
    assert_value("1e3 / 2.5e2", 4.0);
}

#[test]
fn scripts_evaluate_line_by_line() {
    let results = evaluate("2 + 3\n\n// skipped\n5 - 3\n2 * 3\n6 / 2").unwrap();
    assert_eq!(results, vec![5.0, 2.0, 6.0, 3.0]);
    assert!(evaluate("").unwrap().is_empty());
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("1 / 0");
    assert_failure("0 / 0");
    assert_failure("5 / (3 - 3)");
    assert_eq!(evaluate("1 + 1\n2 / 0"),
               Err(Error::Runtime(RuntimeError::DivisionByZero { line: 2 })));
}

#[test]
fn overflow_is_error() {
    assert_failure("1e308 * 10");
}

#[test]
fn syntax_errors_carry_lines() {
    assert_eq!(evaluate("1 + 2\n3 +"),
               Err(Error::Parse(ParseError::UnexpectedEndOfInput { line: 2 })));
    assert_eq!(evaluate("1\n(2 * 3"),
               Err(Error::Parse(ParseError::ExpectedClosingParen { line: 2 })));
    assert!(matches!(evaluate("1 $ 2"),
                     Err(Error::Parse(ParseError::UnexpectedToken { line: 1, .. }))));
}

#[test]
fn error_messages_name_the_line() {
    let err = evaluate("1\n2\n3 / 0").unwrap_err();
    assert_eq!(err.line(), 3);
    assert_eq!(err.to_string(), "Error on line 3: Division by zero.");
}

#[test]
fn single_expression_entry_point_rejects_scripts() {
    assert_failure("1\n2");
    assert_failure("");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.calc").unwrap();
    let results = evaluate(&contents).unwrap();
    assert_eq!(results.len(), 4);
    assert!(approx_eq(results[3], 1.5));
}
