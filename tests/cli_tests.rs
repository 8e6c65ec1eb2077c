use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{rbw, temp_config};

#[test]
fn test_calc_single_day() {
    let cfg = temp_config("calc_single_day");

    rbw()
        .args([
            "--config",
            &cfg,
            "calc",
            "--anchor",
            "2024-01-01",
            "--rate",
            "20",
            "--day",
            "2024-01-01=08:00-16:00",
        ])
        .assert()
        .success()
        .stdout(contains("Total Bi-Weekly Pay"))
        .stdout(contains("$160.00"))
        .stdout(contains("8.00"));
}

#[test]
fn test_calc_positions_and_fractional_rate() {
    let cfg = temp_config("calc_positions");

    rbw()
        .args([
            "--config", &cfg, "calc", "--anchor", "2024-01-01", "--rate", "15.5", "-d",
            "2=9am-1pm", "-d", "3=13-17",
        ])
        .assert()
        .success()
        .stdout(contains("$124.00"))
        .stdout(contains("2024-01-02"))
        .stdout(contains("2024-01-03"));
}

#[test]
fn test_calc_period_crosses_year() {
    let cfg = temp_config("calc_cross_year");

    rbw()
        .args([
            "--config", &cfg, "calc", "--anchor", "2023-12-25", "-d", "14",
        ])
        .assert()
        .success()
        .stdout(contains("2024-01-07"))
        .stdout(contains("$160.00"));
}

#[test]
fn test_calc_without_days_reports_no_data() {
    let cfg = temp_config("calc_no_data");

    rbw()
        .args(["--config", &cfg, "calc", "--anchor", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("No days included in this period."))
        .stdout(contains("Total Bi-Weekly Pay").not());
}

#[test]
fn test_calc_every_day_rule() {
    let cfg = temp_config("calc_every_day");

    rbw()
        .args([
            "--config",
            &cfg,
            "calc",
            "--anchor",
            "2024-01-01",
            "--rate",
            "10",
            "--rule",
            "every_day",
        ])
        .assert()
        .success()
        .stdout(contains("$1,120.00"));
}

#[test]
fn test_calc_inverted_interval_is_negative() {
    let cfg = temp_config("calc_inverted");

    rbw()
        .args([
            "--config", &cfg, "calc", "--anchor", "2024-01-01", "-d", "1=16:00-08:00",
        ])
        .assert()
        .success()
        .stdout(contains("-8.00"))
        .stdout(contains("-$160.00"));
}

#[test]
fn test_calc_rejects_negative_rate() {
    let cfg = temp_config("calc_negative_rate");

    rbw()
        .args(["--config", &cfg, "calc", "--rate", "-1"])
        .assert()
        .failure()
        .stderr(contains("Invalid hourly pay"));
}

#[test]
fn test_calc_rejects_bad_day_position() {
    let cfg = temp_config("calc_bad_day");

    rbw()
        .args(["--config", &cfg, "calc", "--anchor", "2024-01-01", "-d", "15"])
        .assert()
        .failure()
        .stderr(contains("day position must be 1-14"));
}

#[test]
fn test_calc_rejects_day_outside_window() {
    let cfg = temp_config("calc_outside_window");

    rbw()
        .args([
            "--config", &cfg, "calc", "--anchor", "2024-01-01", "-d", "2024-02-01",
        ])
        .assert()
        .failure()
        .stderr(contains("No record exists for 2024-02-01"));
}

#[test]
fn test_session_from_stdin() {
    let cfg = temp_config("session_stdin");

    rbw()
        .args(["--config", &cfg, "session", "--anchor", "2024-01-01"])
        .write_stdin("toggle 1\ntimes 1 9 am 5 pm\nreport\nquit\n")
        .assert()
        .success()
        .stdout(contains("2024-01-01 unlocked"))
        .stdout(contains("$160.00"));
}

#[test]
fn test_session_errors_do_not_end_the_loop() {
    let cfg = temp_config("session_errors");

    rbw()
        .args(["--config", &cfg, "session", "--anchor", "2024-01-01"])
        .write_stdin("toggle 2030-01-01\nrate -3\ntoggle 1\nreport\n")
        .assert()
        .success()
        .stderr(contains("No record exists for 2030-01-01"))
        .stderr(contains("Invalid hourly pay"))
        .stdout(contains("$160.00"));
}

#[test]
fn test_session_navigation_restores_edits() {
    let cfg = temp_config("session_navigation");

    rbw()
        .args(["--config", &cfg, "session", "--anchor", "2024-01-01"])
        .write_stdin("toggle 1\nnext\nprev\nget 1\n")
        .assert()
        .success()
        .stdout(contains("2024-01-15"))
        .stdout(contains("2024-01-01: worked 08:00-16:00"));
}

#[test]
fn test_session_script_file() {
    let cfg = temp_config("session_script");
    let script = common::temp_out("session_script", "txt");
    std::fs::write(&script, "# two days\nwork 1\nwork 2\nrate 12.5\nlog\n").unwrap();

    rbw()
        .args([
            "--config", &cfg, "session", "--anchor", "2024-01-01", "--script", &script,
        ])
        .assert()
        .success()
        .stdout(contains("Total: $200.00"))
        .stdout(contains("Session log"));
}

#[test]
fn test_session_help() {
    let cfg = temp_config("session_help");

    rbw()
        .args(["--config", &cfg, "session"])
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(contains("toggle"))
        .stdout(contains("times"));
}

#[test]
fn test_calc_uses_configured_defaults() {
    let cfg = temp_config("calc_configured_defaults");
    std::fs::write(
        &cfg,
        "hourly_pay: 30.0\ndefault_start: \"09:00\"\ndefault_end: \"13:00\"\nshow_weekday: None\n",
    )
    .unwrap();

    rbw()
        .args(["--config", &cfg, "calc", "--anchor", "2024-01-01", "-d", "1"])
        .assert()
        .success()
        .stdout(contains("$120.00"))
        .stdout(contains("$30.00"));
}

#[test]
fn test_invalid_config_is_reported() {
    let cfg = temp_config("calc_invalid_config");
    std::fs::write(&cfg, "hourly_pay: -2.0\n").unwrap();

    rbw()
        .args(["--config", &cfg, "calc"])
        .assert()
        .failure()
        .stderr(contains("hourly_pay must be >= 0"));
}
