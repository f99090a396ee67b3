//! Output format tests.
//!
//! Checks the shape of every `--format` on real binary output.

#![allow(clippy::unwrap_used, clippy::expect_used, deprecated)]

use std::path::PathBuf;

use assert_cmd::Command;
use pod_test_support::SyntheticImageBuilder;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const MODEL: &str = r"
[photo]
mean = [35.0, 25.0, 1.5]
std_dev = [15.0, 15.0, 1.5]

[drawing]
mean = [3.0, 60.0, 40.0]
std_dev = [5.0, 30.0, 25.0]
";

/// Two images (`a_bw.png` drawing, `b_ramp.png` photo) plus a model file.
fn setup() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir_all(&images).unwrap();
    SyntheticImageBuilder::drawing_like()
        .image
        .save(images.join("a_bw.png"))
        .unwrap();
    SyntheticImageBuilder::photo_like()
        .image
        .save(images.join("b_ramp.png"))
        .unwrap();
    std::fs::write(dir.path().join("model.toml"), MODEL).unwrap();
    (dir, images)
}

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("photo-or-drawing").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg-config"))
        .env("XDG_DATA_HOME", dir.path().join("xdg-data"));
    cmd
}

#[test]
fn test_jsonl_one_object_per_line() {
    let (dir, images) = setup();

    let output = cmd(&dir)
        .args(["--model", "model.toml"])
        .arg(&images)
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let parsed: Value = serde_json::from_str(line).unwrap();
        assert!(parsed["path"].is_string());
        assert!(parsed["timestamp"].is_string());
        assert!(parsed["features"].is_object());
        assert!(parsed["classification"]["photo_probability"].is_number());
    }
}

#[test]
fn test_json_array() {
    let (dir, images) = setup();

    let output = cmd(&dir)
        .args(["--model", "model.toml", "--format", "json"])
        .arg(&images)
        .output()
        .unwrap();

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = parsed.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["classification"]["label"], "drawing");
    assert_eq!(results[1]["classification"]["label"], "photo");
}

#[test]
fn test_json_pretty() {
    let (dir, images) = setup();

    cmd(&dir)
        .args(["--model", "model.toml", "--format", "json", "--pretty"])
        .arg(&images)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[\n  {"));
}

#[test]
fn test_pretty_ignored_for_jsonl() {
    let (dir, images) = setup();

    cmd(&dir)
        .args(["--model", "model.toml", "--pretty"])
        .arg(&images)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"path\""));
}

#[test]
fn test_text_labels() {
    let (dir, images) = setup();

    cmd(&dir)
        .args(["--model", "model.toml", "--format", "text"])
        .arg(&images)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("a_bw.png => drawing")
                .and(predicate::str::contains("b_ramp.png => photo")),
        );
}

#[test]
fn test_text_features() {
    let (dir, images) = setup();

    cmd(&dir)
        .args(["features", "--format", "text"])
        .arg(images.join("a_bw.png"))
        .assert()
        .success()
        .stdout(predicate::str::ends_with("a_bw.png => 0.78125 50 50\n"));
}

#[test]
fn test_arff_training_table() {
    let (dir, images) = setup();

    let output = cmd(&dir)
        .args(["features", "--format", "arff", "--label", "drawing"])
        .arg(images.join("a_bw.png"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("@relation photo-or-drawing\n"));
    assert!(stdout.contains("@attribute pct05pc numeric\n"));
    assert!(stdout.contains("@attribute class {photo,drawing}\n"));
    assert!(stdout.ends_with("0.78125,50,50,drawing\n"), "{stdout}");
}

#[test]
fn test_arff_unlabelled_rows() {
    let (dir, images) = setup();

    cmd(&dir)
        .args(["features", "--format", "arff"])
        .arg(images.join("b_ramp.png"))
        .assert()
        .success()
        .stdout(predicate::str::ends_with(",?\n"));
}

#[test]
fn test_arff_uses_predictions() {
    let (dir, images) = setup();

    cmd(&dir)
        .args(["--model", "model.toml", "--format", "arff"])
        .arg(&images)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("0.78125,50,50,drawing\n")
                .and(predicate::str::contains("31.25,28,").and(predicate::str::ends_with(",photo\n"))),
        );
}

#[test]
fn test_empty_input_json_array() {
    let (dir, _) = setup();
    let empty = dir.path().join("empty");
    std::fs::create_dir_all(&empty).unwrap();

    cmd(&dir)
        .args(["features", "--format", "json"])
        .arg(&empty)
        .assert()
        .code(0)
        .stdout("[]\n");
}
