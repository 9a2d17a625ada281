// End-to-end tests for the loc2yaml binary.
use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

const INPUT: &str = "l_english:\n title: \"Hello\"\n body: 3 \"one\\ntwo\"\n bad: unquoted\n worse: also bad\n";

const YAML: &str = "l_english:\n  title: \"Hello\"\n  body: |-\n    one\n    two\n";

fn cmd() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_loc2yaml"));
    command.env_remove("RUST_LOG");
    command
}

fn run_with_stdin(mut command: Command, input: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("output")
}

fn write_input(dir: &tempfile::TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("strings.yml");
    std::fs::write(&path, text).expect("write input");
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf8 stderr")
}

#[test]
fn converts_file_to_stdout() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_input(&temp, INPUT);

    let output = cmd().arg(&path).output().expect("run");
    assert!(output.status.success());
    assert_eq!(stdout(&output), YAML);
    assert_eq!(
        stderr(&output).trim_end(),
        "Skipped 2 line(s). Check formatting near: bad: unquoted"
    );
}

#[test]
fn reads_stdin_without_argument() {
    let output = run_with_stdin(cmd(), INPUT);
    assert!(output.status.success());
    assert_eq!(stdout(&output), YAML);
}

#[test]
fn reads_stdin_from_dash() {
    let mut command = cmd();
    command.arg("-");
    let output = run_with_stdin(command, "k: \"v\"");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "k: \"v\"\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn writes_output_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_input(&temp, INPUT);
    let out = temp.path().join("out.yaml");

    let output = cmd()
        .arg(&path)
        .arg("-o")
        .arg(&out)
        .output()
        .expect("run");
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    let written = std::fs::read_to_string(&out).expect("read output");
    assert_eq!(written, YAML.trim_end_matches('\n'));
}

#[test]
fn indent_flag_changes_width() {
    let mut command = cmd();
    command.args(["--indent", "4"]);
    let output = run_with_stdin(command, "root:\nk: \"v\"");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "root:\n    k: \"v\"\n");
}

#[test]
fn json_format_prints_parse_result() {
    let mut command = cmd();
    command.args(["--format", "json"]);
    let output = run_with_stdin(command, INPUT);
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output)).expect("valid json");
    assert_eq!(json["rootKey"], "l_english");
    assert_eq!(json["entries"][1]["key"], "body");
    assert_eq!(json["entries"][1]["value"], "one\ntwo");
    assert_eq!(json["entries"][1]["rawValue"], "one\\ntwo");
    assert_eq!(json["entries"][1]["line"], 3);
    assert_eq!(json["errors"][0]["line"], 4);
    assert_eq!(json["errors"][1]["content"], "worse: also bad");
}

#[test]
fn all_errors_lists_every_skipped_line() {
    let mut command = cmd();
    command.arg("--all-errors");
    let output = run_with_stdin(command, INPUT);
    assert!(output.status.success());
    assert_eq!(
        stderr(&output),
        "skipped line 4: bad: unquoted\nskipped line 5: worse: also bad\n"
    );
}

#[test]
fn strict_exits_two_on_skipped_lines() {
    let mut command = cmd();
    command.arg("--strict");
    let output = run_with_stdin(command, INPUT);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), YAML);
}

#[test]
fn strict_succeeds_on_clean_input() {
    let mut command = cmd();
    command.arg("--strict");
    let output = run_with_stdin(command, "k: \"v\"\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn missing_input_exits_one() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("missing.yml");

    let output = cmd().arg(&missing).output().expect("run");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.starts_with("Error: IO error:"), "stderr: {err}");
    assert!(err.contains("missing.yml"));
}

#[test]
fn empty_result_prints_nothing() {
    let output = run_with_stdin(cmd(), "# only a comment\nl_english:\n");
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).is_empty());
}
