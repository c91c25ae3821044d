// Copyright © 2025 Potato Util. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for the `potato-util` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn potato_util() -> Command {
    let mut cmd = Command::cargo_bin("potato-util").unwrap();
    // Keep the environment deterministic regardless of the host shell.
    _ = cmd.env_remove("DEBUG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn slug_prints_normalised_text() {
    potato_util()
        .args(["slug", "My Photo File!!.png"])
        .assert()
        .success()
        .stdout(predicate::str::diff("my-photo-file-png\n"));
}

#[test]
fn slug_strips_diacritics() {
    potato_util()
        .args(["slug", "Café Münster"])
        .assert()
        .success()
        .stdout(predicate::str::diff("cafe-munster\n"));
}

#[test]
fn slug_honours_separator_and_length() {
    potato_util()
        .args(["slug", "My Photo File!!.png", "--separator", "_"])
        .assert()
        .success()
        .stdout(predicate::str::diff("my_photo_file_png\n"));

    potato_util()
        .args(["slug", "My Photo File!!.png", "--max-length", "8"])
        .assert()
        .success()
        .stdout(predicate::str::diff("my-photo\n"));
}

#[test]
fn slug_rejects_invalid_separator() {
    potato_util()
        .args(["slug", "anything", "--separator", "!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn slug_reads_defaults_from_config_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("potato.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    file.write_all(b"[slug]\nseparator = \"_\"\n").unwrap();

    potato_util()
        .args(["slug", "My Photo File!!.png", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::diff("my_photo_file_png\n"));
}

#[test]
fn debug_reflects_environment_variable() {
    potato_util()
        .arg("debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));

    potato_util()
        .arg("debug")
        .env("DEBUG", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    potato_util()
        .arg("debug")
        .env("DEBUG", "off")
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));
}

#[test]
fn config_prints_effective_configuration() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("potato.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    file.write_all(b"debug = true\n\n[slug]\nmax_length = 32\n")
        .unwrap();

    potato_util()
        .args(["config", "--file"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"debug\": true"))
        .stdout(predicate::str::contains("\"max_length\": 32"));
}

#[test]
fn no_arguments_shows_help() {
    potato_util()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
