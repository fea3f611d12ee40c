use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("deltapath-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn default_options_reach_the_target() {
    cli().arg("16").assert().success().stdout(
        predicate::str::contains("Path found with 1 steps:")
            .and(predicate::str::contains("Start: 0"))
            .and(predicate::str::contains("Step 1: +16 -> 16")),
    );
}

#[test]
fn explicit_options_print_the_full_trace() {
    cli()
        .args(["10", "--options", "2", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Path found with 4 steps:")
                .and(predicate::str::contains("Step 1: +2 -> 2"))
                .and(predicate::str::contains("Step 4: +3 -> 10")),
        );
}

#[test]
fn required_suffix_ends_the_trace() {
    cli()
        .args(["10", "--options", "1", "3", "--required", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 4: +3 -> 10"));
}

#[test]
fn custom_start_offsets_the_trace() {
    cli()
        .args(["9", "--start", "5", "--options", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Start: 5").and(predicate::str::contains("Step 2: +2 -> 9")),
        );
}

#[test]
fn negative_target_is_accepted() {
    cli()
        .args(["-5", "--options", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1: -5 -> -5"));
}

#[test]
fn unreachable_target_reports_no_solution() {
    cli()
        .args(["7", "--options", "2", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No solution found to reach 7 from 0",
        ));
}

#[test]
fn zero_operation_is_a_friendly_error() {
    cli()
        .args(["5", "--options", "0", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zero-valued operation"));
}

#[test]
fn json_mode_emits_the_summary() {
    cli()
        .args(["4", "--options", "2", "--json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"step_count\": 2")
                .and(predicate::str::contains("\"total\": 4")),
        );
}

#[test]
fn json_mode_emits_null_when_unsolvable() {
    cli()
        .args(["7", "--options", "2", "4", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));
}
