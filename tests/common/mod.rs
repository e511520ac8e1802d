#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn trainplan_cmd() -> Command {
    let mut cmd = Command::cargo_bin("trainplan").unwrap();
    cmd.env_remove("TRAINPLAN_ROOT");
    cmd.env_remove("TRAINPLAN_AVAILABILITY");
    cmd.env_remove("TRAINPLAN_LOG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run a command inside `dir` and expect success
pub fn run_ok(dir: &Path, args: &[&str]) {
    trainplan_cmd()
        .current_dir(dir)
        .args(args)
        .assert()
        .success();
}

/// Initialize `dir` with the given availability and set a range
pub fn init_with_range(dir: &Path, availability: &str, start: &str, end: &str) {
    trainplan_cmd()
        .arg("init")
        .arg(dir)
        .arg("--availability")
        .arg(availability)
        .assert()
        .success();
    run_ok(dir, &["range", start, end]);
}

pub const AB_SERIES: &str = r#"id = "ab"

[[trainings]]
name = "A"

[[trainings.exercises]]
name = "Squat"
sets = 5
reps = 5
rest_time_seconds = 180

[[trainings]]
name = "B"

[[trainings.exercises]]
name = "Deadlift"
sets = 1
reps = 5
rest_time_seconds = 240
"#;

pub fn write_series(dir: &Path, file: &str, content: &str) {
    fs::write(dir.join(".trainplan/series").join(file), content).unwrap();
}

pub fn write_model(dir: &Path, file: &str, content: &str) {
    fs::write(dir.join(".trainplan/models").join(file), content).unwrap();
}

pub fn plan_file(dir: &Path) -> String {
    fs::read_to_string(dir.join(".trainplan/plan.toml")).unwrap()
}
