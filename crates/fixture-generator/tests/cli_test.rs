//! Tests driving the `fixture-generator` executable
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

use std::{fs, process::Command};

const EXECUTABLE: &str = env!("CARGO_BIN_EXE_fixture-generator");

#[test]
fn test_cli_defaults_produce_reference_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let status = Command::new(EXECUTABLE)
        .current_dir(dir.path())
        .status()
        .expect("cannot run fixture-generator");
    assert!(status.success());

    let contents = fs::read_to_string(dir.path().join("test-100000.txt")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 100_000);
    assert_eq!(lines[1], "000010: 89ABCDE");
    assert_eq!(lines[99_999], "1869f0: 89ABCDE");
}

#[test]
fn test_cli_explicit_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("octal.txt");
    let status = Command::new(EXECUTABLE)
        .arg("--output")
        .arg(&path)
        .args(&["--lines", "2", "--address-kind", "oct"])
        .status()
        .expect("cannot run fixture-generator");
    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "000000: 89ABCDE\n000020: 89ABCDE\n"
    );
}

#[test]
fn test_cli_invalid_address_kind_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.txt");
    let output = Command::new(EXECUTABLE)
        .arg("-o")
        .arg(&path)
        .args(&["-n", "4", "-a", "binary"])
        .output()
        .expect("cannot run fixture-generator");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("binary"));
    assert!(!path.exists());
}

#[test]
fn test_cli_negative_line_count_fail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("negative.txt");
    let status = Command::new(EXECUTABLE)
        .arg("-o")
        .arg(&path)
        .arg("--lines=-1")
        .status()
        .expect("cannot run fixture-generator");
    assert!(!status.success());
    assert!(!path.exists());
}

#[test]
fn test_cli_unwritable_output_fail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");
    let output = Command::new(EXECUTABLE)
        .arg("-o")
        .arg(&path)
        .output()
        .expect("cannot run fixture-generator");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to write fixture"));
}
