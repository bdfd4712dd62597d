//! Integration tests for the `run` command.

mod common;

use common::{DEMO_DATASET, check_stdout, temp_file, viewscan};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn run_scans_dataset_file() {
    let file = temp_file(DEMO_DATASET);
    check_stdout(
        &["run", file.path().to_str().unwrap()],
        None,
        expect![[r#"
            Key 55 found at index 10
        "#]],
    );
}

#[test]
fn run_reads_stdin() {
    viewscan()
        .args(["run", "-"])
        .write_stdin(DEMO_DATASET)
        .assert()
        .success()
        .stdout("Key 55 found at index 10\n");
}

#[test]
fn run_flags_override_dataset_options() {
    let dataset = DEMO_DATASET.replace("\"key\": 55", "\"key\": 999, \"overrun\": \"strict\"");
    let file = temp_file(&dataset);
    let path = file.path().to_str().unwrap();

    viewscan()
        .args(["--no-color", "run", path])
        .assert()
        .failure()
        .stderr("error: offset view read out of bounds: index 15, length 15\n");

    viewscan()
        .args(["run", path, "--skip-overrun"])
        .assert()
        .success()
        .stdout("Key 999 not found\n");
}

#[test]
fn run_honors_dataset_bound() {
    let dataset = r#"{"direct": [1, 2], "storage": [3, 4], "matrix": [[5, 6]],
                      "count": 1, "key": 6, "bound": "exclusive"}"#;
    viewscan()
        .args(["run", "-"])
        .write_stdin(dataset)
        .assert()
        .success()
        .stdout("Key 6 not found\n");
}

#[test]
fn run_flags_restore_defaults_over_dataset_options() {
    let dataset = r#"{"direct": [1, 2], "storage": [3, 4], "matrix": [[5, 6]],
                      "count": 1, "key": 6, "bound": "exclusive", "overrun": "skip"}"#;

    viewscan()
        .args(["run", "-", "--inclusive"])
        .write_stdin(dataset)
        .assert()
        .success()
        .stdout("Key 6 found at index 1\n");

    viewscan()
        .args(["--no-color", "run", "-", "--inclusive", "--strict"])
        .write_stdin(dataset.replace("\"key\": 6", "\"key\": 9"))
        .assert()
        .failure()
        .stderr("error: direct view read out of bounds: index 2, length 2\n");
}

#[test]
fn run_rejects_conflicting_flags() {
    viewscan()
        .args(["run", "-", "--exclusive", "--inclusive"])
        .write_stdin(DEMO_DATASET)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn run_renders_parse_error_with_filename() {
    let file = temp_file("{\n  \"direct\": [1, x]\n}");
    let path = file.path().to_str().unwrap().to_string();

    viewscan()
        .args(["--no-color", "run", &path])
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("invalid dataset")
                .and(predicate::str::contains("expected value"))
                .and(predicate::str::contains(path.as_str())),
        );
}

#[test]
fn run_reports_missing_file() {
    viewscan()
        .args(["--no-color", "run", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: does-not-exist.json:"));
}
