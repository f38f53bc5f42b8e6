use gitawisdom::config::Config;
use gitawisdom::config::migrate::{fill_missing_fields, missing_fields};
use gitawisdom::models::Language;
use predicates::str::contains;
use std::fs;

mod common;
use common::{gw, reset_home, setup_test_db};

#[test]
fn test_init_writes_config_and_reports_migrations() {
    let home = reset_home("config_init");
    let db_path = setup_test_db("config_init");

    gw("config_init")
        .args(["--db", &db_path, "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied: 20250301_0001_create_kv"))
        .stdout(contains("initialization completed"));

    let cfg = Config::load_from(&home.join("gitawisdom.conf")).expect("config");
    assert_eq!(cfg.database, db_path);
    assert_eq!(cfg.language, Language::En);

    gw("config_init")
        .args(["--db", &db_path, "init"])
        .assert()
        .success()
        .stdout(contains("Database schema is up to date."));

    gw("config_init")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains(db_path.as_str()));

    gw("config_init")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));
}

#[test]
fn test_test_mode_leaves_config_untouched() {
    let home = reset_home("config_test_mode");
    let db_path = setup_test_db("config_test_mode");

    gw("config_test_mode")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    assert!(!home.join("gitawisdom.conf").exists());
}

#[test]
fn test_config_migrate_fills_missing_fields() {
    let home = reset_home("config_migrate");
    fs::create_dir_all(&home).expect("home");
    let path = home.join("gitawisdom.conf");
    fs::write(&path, "language: sa\n").expect("write");

    gw("config_migrate")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields: database, wrap_width, separator_char, translation"));

    gw("config_migrate")
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added fields"));

    let cfg = Config::load_from(&path).expect("config");
    assert_eq!(cfg.language, Language::Sa, "existing values are kept");
    assert_eq!(cfg.wrap_width, 78);
    assert_eq!(cfg.separator_char, "-");
    assert_eq!(cfg.translation, "swami-prabhupada");
}

#[test]
fn missing_fields_on_absent_or_empty_file() {
    let home = reset_home("config_missing_fields");
    fs::create_dir_all(&home).expect("home");
    let path = home.join("gitawisdom.conf");

    assert!(missing_fields(&path).expect("absent").is_empty());

    fs::write(&path, "").expect("write");
    assert_eq!(missing_fields(&path).expect("empty").len(), 5);
    assert_eq!(fill_missing_fields(&path).expect("fill").len(), 5);
    assert!(missing_fields(&path).expect("filled").is_empty());
}

#[test]
fn defaults_when_no_config_file() {
    let home = reset_home("config_defaults");
    let cfg = Config::load_from(&home.join("gitawisdom.conf")).expect("defaults");

    assert_eq!(cfg.language, Language::En);
    assert_eq!(cfg.wrap_width, 78);
}

#[test]
fn test_lang_set_persists_choice() {
    reset_home("config_lang");

    gw("config_lang")
        .args(["lang"])
        .assert()
        .success()
        .stdout(contains("▶ en"));

    gw("config_lang")
        .args(["lang", "--set", "HI"])
        .assert()
        .success()
        .stdout(contains("हिन्दी"));

    gw("config_lang")
        .args(["translate", "currentStreak"])
        .assert()
        .success()
        .stdout(contains("वर्तमान लगातार"));

    // a one-off override wins over the stored language
    gw("config_lang")
        .args(["--lang", "en", "translate", "currentStreak"])
        .assert()
        .success()
        .stdout(contains("Current Streak"));

    gw("config_lang")
        .args(["lang", "--set", "de"])
        .assert()
        .failure()
        .stderr(contains("Unsupported language: de"));
}

#[test]
fn test_db_maintenance_and_log() {
    let db_path = setup_test_db("db_maintenance");

    gw("db_maintenance")
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("5 applied"));

    gw("db_maintenance")
        .args(["--db", &db_path, "--at", "2024-01-01 09:00", "checkin"])
        .assert()
        .success();

    gw("db_maintenance")
        .args(["--db", &db_path, "db", "--info", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Check-ins:"))
        .stdout(contains("Integrity check passed."))
        .stdout(contains("Database optimized."));

    gw("db_maintenance")
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("checkin"));
}
