use assert_cmd::Command;
use predicates::prelude::*;

fn whet() -> Command {
    Command::cargo_bin("whet").expect("binary builds")
}

#[test]
fn passing_run_exits_cleanly_without_summary() {
    whet().assert().success().stderr(
        predicate::str::contains("scalar_checks OK")
            .and(predicate::str::contains("adapter_checks OK"))
            .and(predicate::str::contains("unit tests failed.").not())
            .and(predicate::str::contains("Terminate.").not()),
    );
}

#[test]
fn failing_run_emits_summary_and_terminates() {
    whet()
        .arg("--demo-failures")
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("stack_demo fail: Assertion failed: [1] != []")
                .and(predicate::str::contains(
                    "vector_demo fail: Assertion failed: [1] != []",
                ))
                .and(predicate::str::contains(
                    "map_demo fail: Assertion failed: [{1:1}] != []",
                ))
                .and(predicate::str::contains("9 unit tests failed."))
                .and(predicate::str::contains(" Terminate.")),
        );
}

#[test]
fn no_terminate_keeps_the_process_alive() {
    whet()
        .args(["--demo-failures", "--no-terminate"])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("9 unit tests failed.")
                .and(predicate::str::contains("Terminate.").not()),
        );
}

#[test]
fn failure_hints_carry_expression_and_location() {
    whet().arg("--demo-failures").assert().stderr(
        predicate::str::contains("Hint: stack_1 != stack_2").and(predicate::str::contains("main.rs")),
    );
}

#[test]
fn filter_limits_the_run() {
    whet()
        .args(["--demo-failures", "--test", "/^queue/"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("queue_demo fail:")
                .and(predicate::str::contains("stack_demo").not())
                .and(predicate::str::contains("1 unit tests failed.")),
        );
}

#[test]
fn json_output_is_a_single_document() {
    let assert = whet()
        .args(["--demo-failures", "--no-terminate", "--output-format", "json"])
        .assert()
        .success();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&stderr).expect("stderr should be one JSON document");
    assert_eq!(parsed["summary"]["failed"], 9);
    assert_eq!(parsed["summary"]["passed"], 4);
}

#[test]
fn verbose_logging_never_pollutes_the_json_document() {
    let assert = whet()
        .args([
            "--demo-failures",
            "--no-terminate",
            "--output-format",
            "json",
            "--verbose",
        ])
        .assert()
        .success();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&stderr).expect("stderr should stay one JSON document");
    assert_eq!(parsed["summary"]["tests"], 13);
}

#[test]
fn invalid_filter_is_rejected_up_front() {
    whet()
        .args(["--test", "/(/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid test filter"));
}
