#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn tt() -> Command {
    cargo_bin_cmd!("ttracker")
}

/// Create an isolated config root for one test.
pub fn setup_dir() -> TempDir {
    tempfile::tempdir().expect("create temp config dir")
}

pub fn dir_arg(dir: &TempDir) -> String {
    dir.path().to_string_lossy().to_string()
}

pub fn session_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("current_session.json")
}

pub fn log_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("time_logs.csv")
}

/// Pre-seed a session record, bypassing the CLI.
pub fn seed_session(dir: &TempDir, name: &str, start_time: &str, description: &str) {
    let doc = format!(
        "{{\n  \"name\": \"{}\",\n  \"start_time\": \"{}\",\n  \"description\": \"{}\"\n}}\n",
        name, start_time, description
    );
    fs::write(session_path(dir), doc).expect("seed session record");
}

/// Pre-seed the CSV log with the fixed header plus the given raw rows.
pub fn seed_log(dir: &TempDir, rows: &[&str]) {
    let mut text = String::from("name,date,start_time,end_time,duration_hours,description\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    fs::write(log_path(dir), text).expect("seed log");
}

pub fn read_to_string(path: &Path) -> String {
    fs::read_to_string(path).expect("read file")
}
