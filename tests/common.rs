#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use babylog::models::EventRecord;
use babylog::store::EventStore;
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn blg() -> Command {
    cargo_bin_cmd!("babylog")
}

/// Fresh, empty directory in the system temp dir, one per test name.
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("babylog_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Path of the CSV log inside a fresh test dir (file not created).
pub fn setup_test_log(name: &str) -> PathBuf {
    setup_test_dir(name).join("log.csv")
}

/// Path of a (missing) config file next to the log, so CLI tests never read
/// the user's real configuration.
pub fn test_config(log: &std::path::Path) -> String {
    log.with_file_name("babylog.conf")
        .to_string_lossy()
        .to_string()
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%H:%M:%S %Y-%m-%d").expect("test timestamp")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn rec(at: &str, user: &str, event: &str, data: Option<&str>) -> EventRecord {
    EventRecord::new(ts(at), user, event, data.map(str::to_string))
}

/// Open a store and append the given records.
pub fn store_with(path: &std::path::Path, records: &[EventRecord]) -> EventStore {
    let store = EventStore::open(path).expect("open store");
    for r in records {
        store.append(r).expect("append");
    }
    store
}

/// Append a raw line, bypassing the store (for malformed rows).
pub fn append_raw_line(path: &std::path::Path, line: &str) {
    use std::io::Write;
    let mut f = fs::OpenOptions::new()
        .append(true)
        .open(path)
        .expect("open log");
    writeln!(f, "{}", line).expect("write raw line");
}
