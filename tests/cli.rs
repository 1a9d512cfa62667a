use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

fn input(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("inputs")
        .join(name)
}

#[test]
fn sample_output_right_answer() {
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.arg("inputs/sample.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("POSTMAN ROUTE CALCULATOR"))
        .stdout(str::contains("The newt has to apologize 1 time(s)."));
}

#[test]
fn quiet_prints_bare_number() {
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.arg("--quiet").arg("inputs/star.txt");

    cmd.assert().success().stdout("2\n");
}

#[test]
fn asks_for_file_name_until_given_one() {
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.write_stdin("\n   \ninputs/sample.txt\n");

    cmd.assert()
        .success()
        .stdout(str::contains("File name can't be empty!"))
        .stdout(str::contains("The newt has to apologize 1 time(s)."));
}

#[test]
fn fails_when_stdin_ends_without_file_name() {
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.write_stdin("\n");

    cmd.assert()
        .failure()
        .stderr(str::contains("No file name given"));
}

#[test]
fn saves_result_to_given_file() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("result.txt");
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.arg(input("star.txt"))
        .arg(format!("--output={}", output_path.display()));

    cmd.assert()
        .success()
        .stdout(str::contains("Result saved to file("));
    assert_eq!(fs::read_to_string(&output_path).unwrap(), "2");
}

#[test]
fn saves_result_to_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.current_dir(dir.path()).arg(input("sample.txt")).arg("-q").arg("-o");

    cmd.assert().success().stdout("1\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("output.txt")).unwrap(),
        "1"
    );
}

#[test]
fn output_flag_before_input_path_leaves_input_alone() {
    let dir = tempfile::tempdir().unwrap();
    let nests_path = dir.path().join("nests.txt");
    fs::copy(input("sample.txt"), &nests_path).unwrap();
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.current_dir(dir.path())
        .arg("-q")
        .arg("-o")
        .arg(&nests_path)
        .write_stdin(format!("{}\n", nests_path.display()));

    cmd.assert().success().stdout("1\n");
    assert_eq!(
        fs::read_to_string(&nests_path).unwrap(),
        fs::read_to_string(input("sample.txt")).unwrap()
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("output.txt")).unwrap(),
        "1"
    );
}

#[test]
fn output_path_given_with_short_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("result.txt");
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.arg("-q")
        .arg(format!("-o={}", output_path.display()))
        .arg(input("star.txt"));

    cmd.assert().success().stdout("2\n");
    assert_eq!(fs::read_to_string(&output_path).unwrap(), "2");
}

#[test]
fn unwritable_output_is_reported_but_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.arg(input("sample.txt"))
        .arg("-q")
        .arg(format!(
            "--output={}",
            dir.path().join("missing").join("result.txt").display()
        ));

    cmd.assert()
        .success()
        .stdout("1\n")
        .stderr(str::contains("Failed to save result"));
}

#[test]
fn malformed_input_fails() {
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.arg("inputs/bad_neighbor.txt");

    cmd.assert().failure().stderr(
        str::contains("Failed to read nests")
            .and(str::contains("neighbor(4) of node 1 is out of range [1, 3].")),
    );
}

#[test]
fn disconnected_input_fails() {
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.arg("inputs/split.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("node 3 can't be reached from the root nest."));
}

#[test]
fn missing_input_file_fails() {
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.arg("inputs/no_such_file.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to read nests from given file"));
}

#[test]
fn verbose_logs_solving_steps() {
    let mut cmd = Command::cargo_bin("postman").unwrap();
    cmd.arg("-q").arg("-v").arg("inputs/sample.txt");

    cmd.assert()
        .success()
        .stdout("1\n")
        .stderr(str::contains("DEBUG").and(str::contains("1 target nest(s)")));
}
