use predicates::str::contains;
use std::fs;

mod common;
use common::{rbw, temp_config};

use rbiweekly::config::{Config, migrate};
use rbiweekly::models::inclusion::InclusionRule;
use rbiweekly::models::interval_policy::IntervalPolicy;
use std::path::Path;

#[test]
fn test_missing_file_gives_defaults() {
    let cfg_path = temp_config("lib_missing_file");
    let cfg = Config::load_from(Path::new(&cfg_path)).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.hourly_pay, 20.0);
    assert_eq!(cfg.inclusion_rule, InclusionRule::Worked);
    assert_eq!(cfg.inverted_interval, IntervalPolicy::Allow);
}

#[test]
fn test_partial_file_uses_defaults_for_the_rest() {
    let cfg_path = temp_config("lib_partial_file");
    fs::write(&cfg_path, "inclusion_rule: every_day\ninverted_interval: reject\n").unwrap();

    let cfg = Config::load_from(Path::new(&cfg_path)).unwrap();
    assert_eq!(cfg.inclusion_rule, InclusionRule::EveryDay);
    assert_eq!(cfg.inverted_interval, IntervalPolicy::Reject);
    assert_eq!(cfg.default_start, "08:00");
}

#[test]
fn test_bad_default_time_is_rejected() {
    let cfg_path = temp_config("lib_bad_time");
    fs::write(&cfg_path, "default_start: \"25:00\"\n").unwrap();
    assert!(Config::load_from(Path::new(&cfg_path)).is_err());
}

#[test]
fn test_migrate_adds_missing_keys_only() {
    let cfg_path = temp_config("lib_migrate");
    fs::write(&cfg_path, "hourly_pay: 12.5\n").unwrap();
    let path = Path::new(&cfg_path);

    let missing = migrate::missing_keys(path).unwrap();
    assert!(missing.contains(&"inclusion_rule".to_string()));
    assert!(!missing.contains(&"hourly_pay".to_string()));

    let added = migrate::migrate(path).unwrap();
    assert_eq!(added, missing);
    assert!(migrate::missing_keys(path).unwrap().is_empty());

    let cfg = Config::load_from(path).unwrap();
    assert_eq!(cfg.hourly_pay, 12.5);
    assert_eq!(cfg.default_end, "16:00");
}

#[test]
fn test_init_writes_config_file() {
    let cfg = temp_config("cli_init");

    rbw()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("hourly_pay: 20.0"));
    assert!(content.contains("inclusion_rule: worked"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let cfg = temp_config("cli_init_test_mode");

    rbw()
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success();

    assert!(!Path::new(&cfg).exists());
}

#[test]
fn test_config_print() {
    let cfg = temp_config("cli_config_print");

    rbw()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("hourly_pay"))
        .stdout(contains("default_start"));
}

#[test]
fn test_config_check_and_migrate() {
    let cfg = temp_config("cli_config_check");
    fs::write(&cfg, "hourly_pay: 12.5\n").unwrap();

    rbw()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("inclusion_rule"));

    rbw()
        .args(["--config", &cfg, "config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added fields"));

    rbw()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));

    let content = fs::read_to_string(&cfg).unwrap();
    assert!(content.contains("hourly_pay: 12.5"));
}

#[test]
fn test_config_check_without_file() {
    let cfg = temp_config("cli_config_check_missing");

    rbw()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}
