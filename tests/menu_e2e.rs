#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn gradebook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.arg("--no-color");
    cmd
}

fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

#[test]
fn test_exit_immediately() {
    gradebook_cmd()
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("====== GRADE MANAGEMENT SYSTEM ======"))
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn test_end_of_input_exits_with_success() {
    gradebook_cmd()
        .write_stdin("1\nAnn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter student ID (positive number): "))
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn test_full_session() {
    let input = script(&[
        "1", "Ann", "1", // add Ann
        "1", "Bob", "2", // add Bob
        "2", "1", "1", // manage id 1
        "1", "2", "90", "80", // add two grades
        "3", // back
        "4", "1", // remove Ann
        "3", // list
        "5",
    ]);

    gradebook_cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added successfully!"))
        .stdout(predicate::str::contains("Managing: Ann"))
        .stdout(predicate::str::contains("Grades: 90 80 \nAverage: 85.00"))
        .stdout(predicate::str::contains("Student removed!"))
        .stdout(predicate::str::contains("========== STUDENT LIST =========="))
        .stdout(predicate::str::contains("ID:     2 | Name: Bob"))
        .stdout(predicate::str::contains("Grades: None"));
}

#[test]
fn test_listing_is_sorted_by_id() {
    let input = script(&["1", "Zed", "30", "1", "Amy", "4", "3", "5"]);
    let output = gradebook_cmd().write_stdin(input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let listing = &stdout[stdout.find("STUDENT LIST").unwrap()..];
    let amy = listing.find("Amy").unwrap();
    let zed = listing.find("Zed").unwrap();
    assert!(amy < zed);
}

#[test]
fn test_empty_listing() {
    gradebook_cmd()
        .write_stdin("3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\nNo students found.\n"))
        .stdout(predicate::str::contains("STUDENT LIST").not());
}

#[test]
fn test_invalid_input_is_reprompted() {
    gradebook_cmd()
        .write_stdin("seven\n0\n5\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid input. Please enter a value between 1 and 5.")
                .count(2),
        );
}

#[test]
fn test_non_utf8_input_is_recovered() {
    let mut input = b"\xff\n1\nJos\xe9\n1\n3\n".to_vec();
    input.extend_from_slice(b"5\n");

    gradebook_cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please enter a value between 1 and 5.",
        ))
        .stdout(predicate::str::contains("Student added successfully!"))
        .stdout(predicate::str::contains("Name: Jos\u{FFFD}"))
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn test_zero_max_attempts_is_rejected() {
    gradebook_cmd()
        .args(["--max-attempts", "0"])
        .write_stdin("5\n")
        .assert()
        .failure();
}

#[test]
fn test_max_attempts_gives_up() {
    gradebook_cmd()
        .args(["--max-attempts", "2"])
        .write_stdin("x\ny\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Too many invalid attempts (2)"))
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn test_unknown_flag_fails() {
    gradebook_cmd().arg("--bogus").assert().failure();
}
