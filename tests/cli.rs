use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

fn reckon(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reckon")).args(args)
                                              .output()
                                              .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_input(name: &str, contents: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn evaluates_the_argument() {
    let output = reckon(&["1 + 2 * 3 + -(4 - 5)"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "8\n");
    assert_eq!(stderr_of(&output), "");
}

#[test]
fn reads_one_line_from_stdin_without_an_argument() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_reckon")).stdin(Stdio::piped())
                                                              .stdout(Stdio::piped())
                                                              .stderr(Stdio::piped())
                                                              .spawn()
                                                              .unwrap();
    child.stdin
         .take()
         .unwrap()
         .write_all(b"10 * (5 - 1) + 2.0\n")
         .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "42.0\n");
}

#[test]
fn reads_the_expression_from_a_file() {
    let path = write_input("reckon_cli_file.txt", "-(4 - 5)\n");
    let output = reckon(&["--file", path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1\n");
}

#[test]
fn missing_file_fails() {
    let output = reckon(&["--file", "does/not/exist.txt"]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Failed to read the input file 'does/not/exist.txt'"));
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn errors_go_to_stderr_with_a_failure_status() {
    let output = reckon(&["5 / 0"]);

    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "");
    assert_eq!(stderr_of(&output), "Error at position 2: Division by zero.\n");
}

#[test]
fn policies_are_selected_by_flags() {
    let output = reckon(&["--division", "truncate", "7 / 2"]);
    assert_eq!(stdout_of(&output), "3\n");

    let output = reckon(&["--overflow", "fail", "9223372036854775807 + 1"]);
    assert!(!output.status.success());
    assert_eq!(stderr_of(&output), "Error at position 20: Integer overflow.\n");

    let output = reckon(&["--division", "floor", "7 / 2"]);
    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn large_inputs_do_not_crash() {
    let chain = write_input("reckon_cli_chain.txt", &vec!["1"; 100_000].join("+"));
    let output = reckon(&["--file", chain.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "100000\n");

    let depth = 100_000;
    let nested = write_input("reckon_cli_nested.txt",
                             &format!("{}1{}", "(".repeat(depth), ")".repeat(depth)));
    let output = reckon(&["--file", nested.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_of(&output),
               "Error at position 256: Parentheses are nested too deeply.\n");
}
