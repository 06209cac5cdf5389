use std::process::{Command, Output};

fn abacus(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_abacus")).args(args)
                                              .env_remove("RUST_LOG")
                                              .output()
                                              .unwrap_or_else(|e| panic!("Failed to run abacus: {e}"))
}

#[test]
fn prints_one_result_per_line() {
    let output = abacus(&["2 + 3\n6 / 2"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "5\n3\n");
}

#[test]
fn rounds_to_requested_digits() {
    let output = abacus(&["--digits", "2", "0.1 + 0.2"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0.30\n");
}

#[test]
fn division_by_zero_exits_with_failure() {
    let output = abacus(&["1\n2 / 0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error on line 2: Division by zero."),
            "unexpected stderr: {stderr}");
}

#[test]
fn infinite_literal_is_rejected() {
    let output = abacus(&["1e400"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("inf"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error on line 1: Literal is too large."));
}

#[test]
fn reads_scripts_from_files() {
    let output = abacus(&["--file", "tests/example.calc"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 4);
}

#[test]
fn missing_file_exits_with_failure() {
    let output = abacus(&["--file", "tests/does-not-exist.calc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read the input file"));
}
