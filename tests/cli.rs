use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("projectile-sim").unwrap()
}

#[test]
fn solve_prints_the_report() {
    cli()
        .args(["--speed", "20", "--angle", "45", "--dt", "0.01", "--mass", "1", "--drag", "0"])
        .arg("solve")
        .assert()
        .success()
        .stdout(predicate::str::contains("The body has reached the ground."))
        .stdout(predicate::str::is_match(r"Range:\s+40\.7\d{3} m").unwrap())
        .stdout(predicate::str::is_match(r"Max height:\s+10\.1\d{3} m").unwrap())
        .stdout(predicate::str::is_match(r"Flight time:\s+2\.88\d{2} s").unwrap());
}

#[test]
fn solve_is_the_default_command() {
    cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("Range:"));
}

#[test]
fn comma_decimals_are_accepted() {
    cli()
        .args(["--speed", "12,5", "--dt", "0,02", "solve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flight time:"));
}

#[test]
fn zero_mass_fails_fast() {
    cli()
        .args(["--mass", "0", "solve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("degenerate parameters"));
}

#[test]
fn unparsable_input_is_reported() {
    cli()
        .args(["--speed", "fast", "solve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid speed: 'fast'"));
}

#[test]
fn runaway_flight_is_capped() {
    cli()
        .args(["--angle", "90", "--drag", "-1", "--max-steps", "1000", "solve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("within 1000 steps"));
}

#[test]
fn animate_prints_each_tick_and_lands_once() {
    let output = cli()
        .args(["--drag", "0", "--dt", "0.05", "animate"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("    t (s)"));
    assert_eq!(stdout.matches("The body has reached the ground.").count(), 1);
    // 45 degrees at 20 m/s and dt = 0.05 lands on step 57
    let rows = stdout.lines().filter(|l| l.trim_start().starts_with(char::is_numeric)).count();
    assert!(rows > 50, "only {rows} sample rows");
}

#[test]
fn run_file_and_exports() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("run.toml");
    fs::write(
        &config,
        "[launch]\nspeed = 15.0\nangle_degrees = 60.0\nmass = 2.0\n\n[sim]\nmax_steps = 100000\n",
    )
    .unwrap();
    let json_path = dir.path().join("report.json");
    let csv_path = dir.path().join("trajectory.csv");

    cli()
        .arg("--config")
        .arg(&config)
        .arg("solve")
        .arg("--json")
        .arg(&json_path)
        .arg("--csv")
        .arg(&csv_path)
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(report["launch"]["speed"], 15.0);
    assert_eq!(report["launch"]["drag"], 0.1);
    let steps = report["performance"]["steps"].as_u64().unwrap();

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("time,x,y"));
    assert_eq!(csv.lines().count() as u64, steps + 2);
}

#[test]
fn bad_run_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("run.toml");
    fs::write(&config, "[launch]\nspeed = \"fast\"\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config)
        .arg("solve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading run file"));
}
