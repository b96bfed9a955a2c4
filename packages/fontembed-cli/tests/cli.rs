//! Integration tests for the `fontembed` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Test: explicit paths produce the header
#[test]
fn test_embed_with_explicit_paths() {
    let temp_dir = TempDir::new().unwrap();
    let font_path = temp_dir.path().join("font.ttf");
    let header_path = temp_dir.path().join("font.hpp");

    fs::write(&font_path, [0x00, 0x0A, 0xFF]).unwrap();

    let mut cmd = Command::cargo_bin("fontembed").unwrap();
    cmd.arg(&font_path).arg(&header_path);

    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(&header_path).unwrap(),
        "constexpr unsigned char font_data[] = { 0x00, 0x0A, 0xFF };\n"
    );
}

/// Test: default file names are resolved inside the asset directory
#[test]
fn test_embed_with_asset_dir() {
    let temp_dir = TempDir::new().unwrap();
    let font_path = temp_dir.path().join("NanumGothic-Regular-subset.ttf");

    fs::write(&font_path, [0x4F, 0x54]).unwrap();

    let mut cmd = Command::cargo_bin("fontembed").unwrap();
    cmd.arg("--asset-dir").arg(temp_dir.path());

    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("font.hpp")).unwrap(),
        "constexpr unsigned char font_data[] = { 0x4F, 0x54 };\n"
    );
}

/// Test: a missing font fails and names the path
#[test]
fn test_embed_input_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let font_path = temp_dir.path().join("missing.ttf");
    let header_path = temp_dir.path().join("font.hpp");

    let mut cmd = Command::cargo_bin("fontembed").unwrap();
    cmd.arg(&font_path).arg(&header_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing.ttf"))
        .stderr(predicate::str::contains("was not found"));

    assert!(!header_path.exists());
}

/// Test: --check fails on a stale header and leaves it untouched
#[test]
fn test_check_stale_header() {
    let temp_dir = TempDir::new().unwrap();
    let font_path = temp_dir.path().join("font.ttf");
    let header_path = temp_dir.path().join("font.hpp");

    fs::write(&font_path, [0x01]).unwrap();
    fs::write(&header_path, "// stale\n").unwrap();

    let mut cmd = Command::cargo_bin("fontembed").unwrap();
    cmd.arg("--check").arg(&font_path).arg(&header_path);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("out of date"));

    assert_eq!(fs::read_to_string(&header_path).unwrap(), "// stale\n");
}

/// Test: --check fails on a missing header without creating it
#[test]
fn test_check_missing_header() {
    let temp_dir = TempDir::new().unwrap();
    let font_path = temp_dir.path().join("font.ttf");
    let header_path = temp_dir.path().join("font.hpp");

    fs::write(&font_path, [0x01]).unwrap();

    let mut cmd = Command::cargo_bin("fontembed").unwrap();
    cmd.arg("--check").arg(&font_path).arg(&header_path);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));

    assert!(!header_path.exists(), "Check should not create the header");
}

/// Test: --check succeeds right after embedding
#[test]
fn test_check_up_to_date_header() {
    let temp_dir = TempDir::new().unwrap();
    let font_path = temp_dir.path().join("font.ttf");
    let header_path = temp_dir.path().join("font.hpp");

    fs::write(&font_path, [0x01, 0x02]).unwrap();

    Command::cargo_bin("fontembed")
        .unwrap()
        .arg(&font_path)
        .arg(&header_path)
        .assert()
        .success();

    Command::cargo_bin("fontembed")
        .unwrap()
        .arg("--check")
        .arg(&font_path)
        .arg(&header_path)
        .assert()
        .success();
}
