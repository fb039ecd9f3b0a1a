#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary with colours off and a config path that never exists (defaults).
pub fn ft() -> Command {
    let missing = temp_path("fittracker_no_config", "conf");
    ft_with_config(&missing)
}

pub fn ft_with_config(config: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("fittracker");
    cmd.env_remove("RUST_LOG")
        .args(["--no-color", "--config", config]);
    cmd
}

/// Unique path inside the system temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fittracker.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

/// Today's history header, e.g. "June 5, 2024".
pub fn today_display() -> String {
    chrono::Local::now().date_naive().format("%B %-d, %Y").to_string()
}
