use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Runs `tally eval` against an isolated TALLY_HOME so a user config can't
/// change the expected output.
fn eval_cmd(home: &tempfile::TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("tally");
    cmd.env("TALLY_HOME", home.path());
    cmd
}

#[test]
fn test_eval_adds() {
    let home = tempfile::tempdir().unwrap();
    eval_cmd(&home)
        .args(["eval", "5 + 3"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_eval_is_left_to_right() {
    // No operator precedence: 2 + 3 × 4 evaluates as (2 + 3) × 4
    let home = tempfile::tempdir().unwrap();
    eval_cmd(&home)
        .args(["eval", "2 + 3 * 4"])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_eval_decimals() {
    let home = tempfile::tempdir().unwrap();
    eval_cmd(&home)
        .args(["eval", "12.5 + 0.25"])
        .assert()
        .success()
        .stdout("12.75\n");
}

#[test]
fn test_eval_groups_thousands() {
    let home = tempfile::tempdir().unwrap();
    eval_cmd(&home)
        .args(["eval", "1000 x 1000"])
        .assert()
        .success()
        .stdout("1,000,000\n");
}

#[test]
fn test_eval_raw_skips_grouping() {
    let home = tempfile::tempdir().unwrap();
    eval_cmd(&home)
        .args(["eval", "1000 x 1000", "--raw"])
        .assert()
        .success()
        .stdout("1000000\n");
}

#[test]
fn test_eval_division_by_zero_prints_inf() {
    let home = tempfile::tempdir().unwrap();
    eval_cmd(&home)
        .args(["eval", "1 / 0"])
        .assert()
        .success()
        .stdout("inf\n");
}

#[test]
fn test_eval_accepts_display_symbols() {
    let home = tempfile::tempdir().unwrap();
    eval_cmd(&home)
        .args(["eval", "7 ÷ 2"])
        .assert()
        .success()
        .stdout("3.5\n");
}

#[test]
fn test_eval_rejects_garbage() {
    let home = tempfile::tempdir().unwrap();
    eval_cmd(&home)
        .args(["eval", "2 + two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unexpected character"));
}

#[test]
fn test_eval_trailing_operator_is_an_error() {
    let home = tempfile::tempdir().unwrap();
    eval_cmd(&home)
        .args(["eval", "5 +"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No result"));
}

#[test]
fn test_eval_honors_configured_separator() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("config.toml"),
        "grouping = \" \"\n",
    )
    .unwrap();

    eval_cmd(&home)
        .args(["eval", "1234 + 0"])
        .assert()
        .success()
        .stdout("1 234\n");
}
