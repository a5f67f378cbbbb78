//! Integration tests driving the bookshelf binary

mod common;

use common::sample_library;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Home directory the binary sees, kept inside the test's temp dir
fn isolated_home(dir: &Path) -> PathBuf {
    dir.join("home")
}

/// Run bookshelf in `dir` with `args`, feeding `stdin`.
///
/// `HOME` and `XDG_CONFIG_HOME` point inside `dir`, so settings in the real
/// user config directory are never picked up.
fn run_bookshelf(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let home = isolated_home(dir);
    let mut child = Command::new(env!("CARGO_BIN_EXE_bookshelf"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The process may exit before reading its input (e.g. on a failed load)
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_total_uses_library_csv_by_default() {
    let (temp_dir, _path) = sample_library();
    let output = run_bookshelf(temp_dir.path(), &["total"], "");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "10");
}

#[test]
fn test_file_flag_overrides_settings() {
    let (_temp_dir, path) = sample_library();
    let elsewhere = TempDir::new().unwrap();
    let output = run_bookshelf(
        elsewhere.path(),
        &["genre", "--file", path.to_str().unwrap()],
        "",
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "Classic");
}

#[test]
fn test_settings_file_selects_data_file() {
    let (temp_dir, path) = sample_library();
    fs::rename(&path, temp_dir.path().join("books.csv")).unwrap();
    fs::write(
        temp_dir.path().join("bookshelf.yaml"),
        "data_file: books.csv\ntable_style: markdown\n",
    )
    .unwrap();

    let output = run_bookshelf(temp_dir.path(), &["list"], "");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Persuasion"));
    assert!(text.contains("|---"), "expected markdown table:\n{text}");
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_config_dir_comes_from_environment() {
    let (temp_dir, path) = sample_library();
    fs::rename(&path, temp_dir.path().join("books.csv")).unwrap();

    // Without the user settings the default library.csv is missing
    let output = run_bookshelf(temp_dir.path(), &["total"], "");
    assert!(!output.status.success());

    let config_dir = isolated_home(temp_dir.path()).join(".config/bookshelf");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("bookshelf.yaml"), "data_file: books.csv\n").unwrap();

    let output = run_bookshelf(temp_dir.path(), &["total"], "");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "10");
}

#[test]
fn test_list_json() {
    let (temp_dir, _path) = sample_library();
    let output = run_bookshelf(temp_dir.path(), &["list", "--json"], "");
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let books = parsed.as_array().unwrap();
    assert_eq!(books.len(), 4);
    assert_eq!(books[3]["author"], "Шевченко");
    assert_eq!(books[3]["id"], 3);
}

#[test]
fn test_author_not_found_exits_non_zero() {
    let (temp_dir, _path) = sample_library();
    let output = run_bookshelf(temp_dir.path(), &["author", "Tolstoy"], "");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Author not found"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_bad_header_aborts_startup() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("library.csv"),
        "Title,Author,Year,Genre,Copies\n",
    )
    .unwrap();

    let output = run_bookshelf(temp_dir.path(), &[], "5\n12\n");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid file format"));
    // No menu is shown when the load fails
    assert!(!stdout(&output).contains("Enter choice"));
}

#[test]
fn test_interactive_session() {
    let (temp_dir, _path) = sample_library();
    let script = "1\nHyperion\nSimmons\n1989\nSciFi\n5\n6\n3\nDune\n6\n9\n1989\n12\n";
    let output = run_bookshelf(temp_dir.path(), &[], script);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Added book 4"));
    assert!(text.contains("Enter choice: 15\n"));
    assert!(text.contains("Removed one copy of book 0 (1 left)"));
    assert!(text.contains("Enter choice: 14\n"));
    assert!(text.contains("Hyperion"));
}

#[test]
fn test_changes_are_not_saved() {
    let (temp_dir, path) = sample_library();
    let before = fs::read_to_string(&path).unwrap();

    let output = run_bookshelf(temp_dir.path(), &["shell"], "3\nEmma\n12\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Removed book 1"));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}
