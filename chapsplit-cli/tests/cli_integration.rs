//! Integration tests for the chapsplit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Absolute path to a test fixture
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn chapsplit() -> Command {
    let mut cmd = Command::cargo_bin("chapsplit").unwrap();
    cmd.env_remove("CHAPSPLIT_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_split_into_default_directory() {
    let temp_dir = TempDir::new().unwrap();

    chapsplit()
        .current_dir(temp_dir.path())
        .arg(fixture_path("preprocessed.txt"))
        .arg(fixture_path("translated.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("01_Chapter_One.txt"))
        .stdout(predicate::str::contains("02_Chapter_Two.txt"))
        .stdout(predicate::str::contains("2 chapters split, 2 raw titles listed"));

    let out = temp_dir.path().join("chapters");
    assert_eq!(
        fs::read_to_string(out.join("01_Chapter_One.txt")).unwrap(),
        "〇 Chapter One\nSome text.\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("02_Chapter_Two.txt")).unwrap(),
        "〇 Chapter Two\nMore text.\n"
    );

    let manifest = fs::read_to_string(out.join("chapter_list.txt")).unwrap();
    assert!(manifest.starts_with("EXPERIMENTAL CHAPTER SPLIT"));
    assert!(manifest.contains("\nChapter One\nChapter Two\n\n"));
    assert!(manifest.ends_with("01. 〇 Chapter One\n02. 〇 Chapter Two"));
}

#[test]
fn test_output_dir_flag() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("book").join("chapters");

    chapsplit()
        .arg(fixture_path("preprocessed.txt"))
        .arg(fixture_path("translated.txt"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("01_Chapter_One.txt").exists());
    assert!(out.join("chapter_list.txt").exists());
}

#[test]
fn test_japanese_source_with_translated_toc() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("chapters");

    chapsplit()
        .arg(fixture_path("japanese-preprocessed.txt"))
        .arg(fixture_path("japanese-translated.txt"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 chapters split, 4 raw titles listed"))
        .stdout(predicate::str::contains("warning: chapter count mismatch"));

    assert!(out.join("01_Prologue.txt").exists());
    assert_eq!(
        fs::read_to_string(out.join("02_Chapter_1_A_Snowy_Night.txt")).unwrap(),
        "〇 Chapter 1: A Snowy Night\nSnow was falling.\n〇 — in the year XX, he set out on a journey.\n"
    );
    assert!(out.join("03_Chapter_2_The_Promise_of_Year_XX.txt").exists());

    let manifest = fs::read_to_string(out.join("chapter_list.txt")).unwrap();
    assert!(manifest.contains("第二章　〇〇年の約束"));
}

#[test]
fn test_no_markers_writes_only_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("chapters");

    chapsplit()
        .arg(fixture_path("preprocessed.txt"))
        .arg(fixture_path("translated-no-markers.txt"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 chapters split"))
        .stdout(predicate::str::contains("warning: no chapter markers found"));

    let names: Vec<_> = fs::read_dir(&out).unwrap().collect();
    assert_eq!(names.len(), 1);
    assert!(out.join("chapter_list.txt").exists());
}

#[test]
fn test_json_report() {
    let temp_dir = TempDir::new().unwrap();

    let output = chapsplit()
        .arg(fixture_path("preprocessed.txt"))
        .arg(fixture_path("translated.txt"))
        .arg("-o")
        .arg(temp_dir.path())
        .arg("-f")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["segmented_count"], 2);
    assert_eq!(value["raw_count"], 2);
    assert_eq!(value["consistent"], true);
    assert_eq!(value["chapter_files"].as_array().unwrap().len(), 2);
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("chapters");

    chapsplit()
        .arg(fixture_path("preprocessed.txt"))
        .arg(fixture_path("translated.txt"))
        .arg("-o")
        .arg(&out)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("01_Chapter_One.txt"))
        .stdout(predicate::str::contains("chapter_list.txt").not());

    assert!(!out.exists());
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("chapters");

    chapsplit()
        .arg(fixture_path("preprocessed.txt"))
        .arg(fixture_path("translated.txt"))
        .arg("-o")
        .arg(&out)
        .arg("--config")
        .arg(fixture_path("config.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"segmented_count\": 2"));

    assert!(out.join("01_Chapter_O.txt").exists());
    assert!(out.join("02_Chapter_T.txt").exists());
    assert!(out.join("index.txt").exists());
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[split]\nmax_title_len = \"long\"\n").unwrap();

    chapsplit()
        .arg(fixture_path("preprocessed.txt"))
        .arg(fixture_path("translated.txt"))
        .arg("-o")
        .arg(temp_dir.path().join("chapters"))
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_arguments_exit_with_usage() {
    chapsplit()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    chapsplit()
        .arg(fixture_path("preprocessed.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TRANSLATED"));
}

#[test]
fn test_help_exits_successfully() {
    chapsplit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PREPROCESSED"));
}

#[test]
fn test_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("chapters");

    chapsplit()
        .arg(fixture_path("preprocessed.txt"))
        .arg("nonexistent.txt")
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found: nonexistent.txt"));

    assert!(!out.exists());
}

#[test]
fn test_invalid_utf8_input() {
    let temp_dir = TempDir::new().unwrap();
    let translated = temp_dir.path().join("translated.txt");
    fs::write(&translated, [0x82, 0xa0, 0x0a]).unwrap();

    chapsplit()
        .arg(fixture_path("preprocessed.txt"))
        .arg(&translated)
        .arg("-o")
        .arg(temp_dir.path().join("chapters"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid UTF-8"));
}

#[test]
fn test_partial_split_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("chapters");
    fs::create_dir_all(out.join("02_Chapter_Two.txt")).unwrap();

    chapsplit()
        .arg(fixture_path("preprocessed.txt"))
        .arg(fixture_path("translated.txt"))
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("partial split: wrote 1 of 2 chapter files"));

    assert!(out.join("01_Chapter_One.txt").exists());
    assert!(!out.join("chapter_list.txt").exists());
}

#[test]
fn test_translated_text_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("chapters");

    chapsplit()
        .arg(fixture_path("preprocessed.txt"))
        .arg("-")
        .arg("-o")
        .arg(&out)
        .write_stdin("〇 Chapter One\rSome text.\r〇 Chapter Two\rMore text.\r")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 chapters split, 2 raw titles listed"));

    assert_eq!(
        fs::read_to_string(out.join("01_Chapter_One.txt")).unwrap(),
        "〇 Chapter One\rSome text.\r"
    );
    assert_eq!(
        fs::read_to_string(out.join("02_Chapter_Two.txt")).unwrap(),
        "〇 Chapter Two\rMore text.\r"
    );
}

#[test]
fn test_both_inputs_from_stdin_rejected() {
    let temp_dir = TempDir::new().unwrap();

    chapsplit()
        .current_dir(temp_dir.path())
        .arg("-")
        .arg("-")
        .write_stdin("〇 Chapter One\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("only one input can be read from standard input"));

    assert!(!temp_dir.path().join("chapters").exists());
}
