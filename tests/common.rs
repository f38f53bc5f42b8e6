#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with its configuration directory isolated per test so a
/// real `~/.gitawisdom` is never read or written.
pub fn gw(name: &str) -> Command {
    let home = test_home(name);
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("gitawisdom");
    cmd.env("GITAWISDOM_HOME", &home);
    cmd
}

/// Configuration directory used by `gw(name)`.
pub fn test_home(name: &str) -> PathBuf {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_gitawisdom_home", name));
    home
}

/// Start from an empty configuration directory.
pub fn reset_home(name: &str) -> PathBuf {
    let home = test_home(name);
    fs::remove_dir_all(&home).ok();
    home
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gitawisdom.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema through the CLI, in test mode.
pub fn init_db(name: &str, db_path: &str) {
    gw(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid timestamp")
}
