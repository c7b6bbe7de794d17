use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

const HEADER: &str = "// Code generated by castgen. DO NOT EDIT.";

fn stdout_of(args: &[&str]) -> String {
    let output = cargo_bin_cmd!("castgen").args(args).output().expect("castgen runs");
    assert!(output.status.success(), "castgen {args:?} failed");
    String::from_utf8(output.stdout).expect("generated source is UTF-8")
}

#[test]
fn prints_fixed_width_functions() {
    cargo_bin_cmd!("castgen")
        .arg("casts")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(HEADER))
        .stdout(predicate::str::contains("pub fn i16_to_u32(value: i16) -> (u32, bool) {"))
        .stdout(predicate::str::contains("(value as i8, (value as i8) as i64 == value)"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn prints_generic_dispatch() {
    cargo_bin_cmd!("castgen")
        .arg("generics")
        .assert()
        .success()
        .stdout(predicate::str::contains("pub fn to<T, F: CastTo<T>>(value: F) -> (T, bool) {"))
        .stdout(predicate::str::contains("impl CastTo<f32> for usize {"));
}

#[test]
fn tests_import_the_named_crate() {
    cargo_bin_cmd!("castgen")
        .args(["--crate-name", "numeric-casts", "tests"])
        .assert()
        .success()
        .stdout(predicate::str::contains("use numeric_casts::to;"))
        .stdout(predicate::str::contains("fn u8_to_i8() {"));
}

#[test]
fn lib_uses_the_module_names() {
    cargo_bin_cmd!("castgen")
        .args(["lib", "--casts-module", "fixed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mod fixed;\nmod generics;"));
}

#[test]
fn output_is_byte_identical_across_runs() {
    for command in ["casts", "generics", "tests", "lib"] {
        assert_eq!(stdout_of(&[command]), stdout_of(&[command]), "{command}");
    }
}

#[test]
fn rejects_invalid_names() {
    cargo_bin_cmd!("castgen")
        .args(["--crate-name", "9lives", "casts"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not a valid Rust identifier"));

    cargo_bin_cmd!("castgen")
        .args(["--casts-module", "shared", "--dispatch-module", "shared", "lib"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("`shared` is used twice"));

    for name in ["sealed", "to"] {
        let dir = tempdir().expect("temp dir");
        cargo_bin_cmd!("castgen")
            .args(["--casts-module", name, "write"])
            .arg(dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains(format!("`{name}` is used twice or clashes")));
        assert!(!dir.path().join("src").exists(), "{name}: nothing is written");
    }
}

#[test]
fn write_then_check() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    cargo_bin_cmd!("castgen")
        .arg("write")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("lib.rs"));

    cargo_bin_cmd!("castgen").arg("check").arg(dir.path()).assert().success();

    let casts = dir.path().join("src").join("casts.rs");
    let edited = fs::read_to_string(&casts)?.replace("value >= 0", "value > 0");
    fs::write(&casts, edited)?;

    cargo_bin_cmd!("castgen")
        .arg("check")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"))
        .stderr(predicate::str::contains("casts.rs"));

    Ok(())
}

#[test]
fn logs_go_to_stderr() {
    let output = cargo_bin_cmd!("castgen").arg("casts")
                                          .env("CASTGEN_LOG", "debug")
                                          .output()
                                          .expect("castgen runs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.starts_with(HEADER));
    assert!(stderr.contains("emitted fixed-width conversions"));
}
