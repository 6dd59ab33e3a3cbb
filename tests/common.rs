//! Shared test helpers.
#![allow(dead_code)]

use blockhosts::category::Category;
use blockhosts::config::DataPaths;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temp directory for use as BLOCKHOSTS_HOME.
pub fn temp_home() -> TempDir {
    tempfile::Builder::new()
        .prefix("blockhosts_test_")
        .tempdir()
        .expect("temp dir")
}

/// Write a category snapshot file as if it had been refreshed.
pub fn write_snapshot(paths: &DataPaths, category: Category, lines: &[&str]) {
    std::fs::create_dir_all(&paths.lists_dir).unwrap();
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(paths.snapshot(category), content).unwrap();
}

/// Write a hosts file under `dir` and return its path.
pub fn write_hosts(dir: &std::path::Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("hosts");
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(&path, content).unwrap();
    path
}

pub fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}
