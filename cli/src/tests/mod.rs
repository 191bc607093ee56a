use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_check_valid_patterns() {
    Command::cargo_bin("hscheck")
        .unwrap()
        .arg("check")
        .arg("src/tests/testdata/valid.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[ PASS ] src/tests/testdata/valid.txt",
        ))
        .stdout(predicate::str::contains("1 file(s) ok. errors: 0."));
}

#[test]
fn cli_check_invalid_patterns() {
    Command::cargo_bin("hscheck")
        .unwrap()
        .arg("check")
        .arg("src/tests/testdata/invalid.txt")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "[ FAIL ] src/tests/testdata/invalid.txt",
        ))
        .stdout(predicate::str::contains("src/tests/testdata/invalid.txt:2:"))
        .stderr(predicate::str::contains("error(s) found"));
}

#[test]
fn cli_check_stdin() {
    Command::cargo_bin("hscheck")
        .unwrap()
        .arg("check")
        .arg("-")
        .write_stdin("abc\nfoo|bar\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ PASS ] <stdin>"));
}

#[test]
fn cli_check_stdin_invalid() {
    Command::cargo_bin("hscheck")
        .unwrap()
        .arg("check")
        .arg("-")
        .write_stdin("(abc\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[ FAIL ] <stdin>"))
        .stdout(predicate::str::contains("<stdin>:1:"));
}

#[test]
fn cli_check_ignores_comments_and_blank_lines() {
    Command::cargo_bin("hscheck")
        .unwrap()
        .arg("check")
        .arg("-")
        .write_stdin("# just a comment\n\n   \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ PASS ] <stdin>"));
}

#[test]
fn cli_check_directory_with_filter() {
    Command::cargo_bin("hscheck")
        .unwrap()
        .arg("check")
        .arg("--filter=**/valid.txt")
        .arg("src/tests/testdata")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ PASS ]"))
        .stdout(predicate::str::contains("[ FAIL ]").not());
}

#[test]
fn cli_check_directory() {
    Command::cargo_bin("hscheck")
        .unwrap()
        .arg("check")
        .arg("src/tests/testdata")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[ PASS ]"))
        .stdout(predicate::str::contains("[ FAIL ]"));
}

#[test]
fn cli_check_nonexistent_path() {
    Command::cargo_bin("hscheck")
        .unwrap()
        .arg("check")
        .arg("src/tests/testdata/nonexistent.txt")
        .assert()
        .failure();
}
