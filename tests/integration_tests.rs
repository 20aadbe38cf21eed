use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{TestEnv, env_with_bench_set};

#[test]
fn test_init_installs_program() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("hybridops initialization completed"));

    env.cmd()
        .arg("program")
        .assert()
        .success()
        .stdout(contains("Hybrid Athlete - Beginner"))
        .stdout(contains("Baseline"))
        .stdout(contains("0/13 sessions"));
}

#[test]
fn test_program_week_lists_days() {
    let env = TestEnv::new();
    env.init();
    env.cmd()
        .args(["program", "--week", "1"])
        .assert()
        .success()
        .stdout(contains("1_Mon"))
        .stdout(contains("Bench Press: 4x5"))
        .stdout(contains("1_Fri"));
}

#[test]
fn test_start_parses_exercises() {
    let env = TestEnv::new();
    env.init();
    env.cmd()
        .args(["start", "1_Mon"])
        .assert()
        .success()
        .stdout(contains("Workout 1_Mon started"))
        .stdout(contains("Bench Press"))
        .stdout(contains("Plank"));

    env.cmd()
        .args(["start", "1_Mon"])
        .assert()
        .success()
        .stdout(contains("Resuming workout 1_Mon"));
}

#[test]
fn test_start_rejects_unknown_day() {
    let env = TestEnv::new();
    env.init();
    env.cmd()
        .args(["start", "1_Sun"])
        .assert()
        .failure()
        .stderr(contains("not part of the active program"));

    env.cmd()
        .args(["start", "monday"])
        .assert()
        .failure()
        .stderr(contains("Invalid workout day id"));
}

#[test]
fn test_set_on_missing_day_is_noop() {
    let env = TestEnv::new();
    env.init();
    env.cmd()
        .args(["set", "2_Mon", "1", "1", "--reps", "10"])
        .assert()
        .success()
        .stdout(contains("nothing recorded"));

    env.cmd()
        .args(["set", "2_Mon", "0", "1", "--reps", "10"])
        .assert()
        .failure()
        .stderr(contains("start at 1"));
}

#[test]
fn test_finish_and_week_stats() {
    let env = env_with_bench_set();
    env.cmd()
        .args(["finish", "1_Mon"])
        .assert()
        .success()
        .stdout(contains("Workout 1_Mon complete"))
        .stdout(contains("Duration"));

    env.cmd()
        .args(["stats", "1"])
        .assert()
        .success()
        .stdout(contains("Week 1 debrief"))
        .stdout(contains("300"));

    env.cmd()
        .args(["stats", "42"])
        .assert()
        .failure()
        .stderr(contains("week 42"));
}

#[test]
fn test_next_week_shows_previous_values() {
    let env = env_with_bench_set();
    env.cmd()
        .args(["start", "2_Mon"])
        .assert()
        .success()
        .stdout(contains("previous: 60 lbs × 5"));
}

#[test]
fn test_week_one_compares_with_baseline() {
    let env = TestEnv::new();
    env.init();
    env.run(&["start", "0_Start"]);
    env.run(&["set", "0_Start", "1", "1", "--reps", "25"]);

    env.cmd()
        .args(["start", "1_Wed"])
        .assert()
        .success()
        .stdout(contains("previous").not());

    env.cmd()
        .args(["start", "1_Mon"])
        .assert()
        .success()
        .stdout(contains("previous: 25 reps"));
}

#[test]
fn test_mark_toggles_completion() {
    let env = TestEnv::new();
    env.init();
    env.cmd()
        .args(["mark", "1_Wed"])
        .assert()
        .success()
        .stdout(contains("1_Wed marked as done"));
    env.cmd()
        .args(["mark", "1_Wed"])
        .assert()
        .success()
        .stdout(contains("1_Wed marked as not done"));
}

#[test]
fn test_completing_week_prints_debrief() {
    let env = TestEnv::new();
    env.init();
    env.run(&["mark", "1_Mon"]);
    env.run(&["mark", "1_Wed"]);
    env.run(&["start", "1_Fri"]);
    env.cmd()
        .args(["finish", "1_Fri"])
        .assert()
        .success()
        .stdout(contains("Week 1 complete"))
        .stdout(contains("Distance"));
}

#[test]
fn test_notes_and_add_set() {
    let env = env_with_bench_set();
    env.run(&["notes", "1_Mon", "felt strong"]);
    env.run(&["add-set", "1_Mon", "3"]);

    env.cmd()
        .args(["show", "1_Mon"])
        .assert()
        .success()
        .stdout(contains("felt strong"))
        .stdout(contains("Weight (lbs)"));
}

#[test]
fn test_unit_switch() {
    let env = env_with_bench_set();
    env.cmd()
        .args(["unit", "kg"])
        .assert()
        .success()
        .stdout(contains("Weight unit set to kg"));
    env.cmd()
        .arg("unit")
        .assert()
        .success()
        .stdout(contains("Weight unit: kg"));
}

#[test]
fn test_history_and_progress() {
    let env = env_with_bench_set();
    env.run(&["finish", "1_Mon"]);

    env.cmd()
        .arg("history")
        .assert()
        .success()
        .stdout(contains("Bench Press"));

    env.cmd()
        .args(["history", "Bench Press"])
        .assert()
        .success()
        .stdout(contains("W1 Mon"))
        .stdout(contains("60 lbs"));

    env.cmd()
        .args(["history", "Deadlift"])
        .assert()
        .failure()
        .stderr(contains("no logged values"));

    env.cmd()
        .arg("progress")
        .assert()
        .success()
        .stdout(contains("1/13 sessions"))
        .stdout(contains("Week 1"));
}

#[test]
fn test_one_rep_max() {
    let env = TestEnv::new();
    env.cmd()
        .args(["one-rm", "100", "5"])
        .assert()
        .success()
        .stdout(contains("Estimated 1RM: 117"));

    env.cmd()
        .args(["one-rm", "0", "5"])
        .assert()
        .failure()
        .stderr(contains("Enter a valid weight and reps"));
}

#[test]
fn test_select_every_goal_after_init() {
    let env = TestEnv::new();
    env.init();
    env.cmd()
        .args(["select", "tactical-athlete", "advanced"])
        .assert()
        .success()
        .stdout(contains("Active program: Tactical Athlete - Advanced"));

    env.cmd()
        .args(["program"])
        .assert()
        .success()
        .stdout(contains("0/33 sessions"));

    env.cmd()
        .args(["select", "force-test-prep", "beginner"])
        .assert()
        .success()
        .stdout(contains("Active program: Force Test Prep - Beginner"));

    env.cmd()
        .args(["select", "hybrid-athlete", "beginner"])
        .assert()
        .success()
        .stdout(contains("Active program: Hybrid Athlete - Beginner"));

    env.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("goal: hybridAthlete"));
}

#[test]
fn test_program_override_flag() {
    let env = TestEnv::new();
    env.init();
    let custom = env.path("custom.yaml");
    std::fs::write(
        &custom,
        "name: Custom Plan\nphases:\n  - phase: Only\n    weeks:\n      - week: 1\n        days:\n          - day: Tue\n            focus: Test Run\n            details: |\n              Run: 3km\n",
    )
    .unwrap();

    env.cmd()
        .args(["--program", &custom, "start", "1_Tue"])
        .assert()
        .success()
        .stdout(contains("Test Run"));
}

#[test]
fn test_audit_log_records_changes() {
    let env = env_with_bench_set();
    env.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("start"))
        .stdout(contains("Workout started"));
}

#[test]
fn test_db_info_and_check() {
    let env = env_with_bench_set();
    env.cmd()
        .args(["db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("log_hybridAthlete_beginner"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_select_requires_program_file() {
    let env = TestEnv::new();
    env.init();
    let programs = env.home.path().join(".hybridops").join("programs");
    std::fs::remove_file(programs.join("tacticalAthlete_advanced.yaml")).unwrap();

    env.cmd()
        .args(["select", "tactical-athlete", "advanced"])
        .assert()
        .failure()
        .stderr(contains("program file not found"));
}

#[test]
fn test_info_prints_exercise_card() {
    let env = TestEnv::new();
    env.cmd()
        .args(["info", "Push-ups"])
        .assert()
        .success()
        .stdout(contains("Strength"))
        .stdout(contains("Primary muscles: Chest, Shoulders, Triceps"))
        .stdout(contains("1. Start in a plank position"))
        .stdout(contains("Engage your core throughout the movement"));

    env.cmd()
        .args(["info", "run"])
        .assert()
        .success()
        .stdout(contains("Running"));
}

#[test]
fn test_info_unknown_exercise_prints_nothing() {
    let env = TestEnv::new();
    env.cmd()
        .args(["info", "Bench Press"])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn test_show_points_to_exercise_info() {
    let env = TestEnv::new();
    env.init();
    env.cmd()
        .args(["start", "1_Mon"])
        .assert()
        .success()
        .stdout(contains("Push-ups").and(contains("ℹ")))
        .stdout(contains("hybridops info"));
}
