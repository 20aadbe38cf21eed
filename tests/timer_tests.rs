use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::TestEnv;

fn started() -> TestEnv {
    let env = TestEnv::new();
    env.init();
    env.run(&["start", "1_Mon"]);
    env
}

#[test]
fn test_stopwatch_runs_and_persists() {
    let env = started();
    env.cmd()
        .args(["timer", "1_Mon", "--seconds", "3", "--fast"])
        .assert()
        .success()
        .stdout(contains("Stopwatch started for 1_Mon"))
        .stdout(contains("Timer stopped at 00:03"));

    // a second run continues from the saved time
    env.cmd()
        .args(["timer", "1_Mon", "--seconds", "2", "--fast"])
        .assert()
        .success()
        .stdout(contains("Timer stopped at 00:05"));

    env.cmd()
        .args(["show", "1_Mon"])
        .assert()
        .success()
        .stdout(contains("stopwatch: 00:05"));
}

#[test]
fn test_countdown_reaches_zero() {
    let env = started();
    env.cmd()
        .args(["timer", "1_Mon", "--countdown", "1", "--fast"])
        .assert()
        .success()
        .stdout(contains("Countdown started"))
        .stdout(contains("Time's up"));

    env.cmd()
        .args(["timer", "1_Mon", "--reset"])
        .assert()
        .success()
        .stdout(contains("Timer of 1_Mon reset"));

    env.cmd()
        .args(["show", "1_Mon"])
        .assert()
        .success()
        .stdout(contains("countdown: 01:00"));
}

#[test]
fn test_negative_countdown_rejected() {
    let env = started();
    env.cmd()
        .args(["timer", "1_Mon", "--countdown=-1", "--fast"])
        .assert()
        .failure()
        .stderr(contains("must not be negative"));
}

#[test]
fn test_timer_for_unstarted_day_is_not_saved() {
    let env = TestEnv::new();
    env.init();
    env.cmd()
        .args(["timer", "1_Wed", "--seconds", "2", "--fast"])
        .assert()
        .success()
        .stdout(contains("Timer stopped at 00:02"));

    env.cmd()
        .args(["show", "1_Wed"])
        .assert()
        .success()
        .stdout(contains("Not started yet"));
}

#[test]
fn test_finish_clears_timer() {
    let env = started();
    env.run(&["timer", "1_Mon", "--seconds", "1", "--fast"]);
    env.run(&["finish", "1_Mon"]);
    env.cmd()
        .args(["show", "1_Mon"])
        .assert()
        .success()
        .stdout(contains("stopwatch").not());
}

#[test]
fn test_close_without_running_timers() {
    let env = started();
    env.cmd()
        .arg("close")
        .assert()
        .success()
        .stdout(contains("All timers stopped"));
}
