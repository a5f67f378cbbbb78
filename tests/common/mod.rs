//! Shared helpers for integration tests

#![allow(dead_code)]

use bookshelf::catalog::HEADER;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a load file with the standard header followed by `rows`
pub fn write_catalog(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let mut contents = format!("{}\n", HEADER);
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Temp dir holding `library.csv` with a small sample catalog
pub fn sample_library() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(
        temp_dir.path(),
        "library.csv",
        &[
            "Dune,Herbert,1965,SciFi,2",
            "Emma,Austen,1815,Classic,1",
            "Persuasion,Austen,1817,Classic,4",
            "Кобзар,Шевченко,1840,Поезія,3",
        ],
    );
    (temp_dir, path)
}
