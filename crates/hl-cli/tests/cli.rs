use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn hl(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hl"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_valid_program() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("prog.hl"), "x:integer;\nx:=5;\noutput<<x;\n").unwrap();

    let output = hl(dir.path(), &["prog.hl"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "NO ERROR(S) FOUND\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("NOSPACES.TXT")).unwrap(),
        "x:integer;x:=5;output<<x;"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("RES_SYM.TXT")).unwrap(),
        ":\n:=\n;\n<<\ninteger\noutput\n"
    );
}

#[test]
fn test_invalid_program() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("prog.hl"), "x:=5;\n").unwrap();

    let output = hl(dir.path(), &["prog.hl"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "ERROR\n");
    assert!(dir.path().join("RES_SYM.TXT").exists());
}

#[test]
fn test_missing_source() {
    let dir = tempdir().unwrap();
    let output = hl(dir.path(), &["absent.hl"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "ERROR: Source file 'absent.hl' not found.\n");
}

#[test]
fn test_missing_source_wins_over_bad_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hl.toml"), "[artifacts\nenabled = ").unwrap();

    let output = hl(dir.path(), &["absent.hl"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "ERROR: Source file 'absent.hl' not found.\n");
}

#[test]
fn test_bad_config_with_existing_source() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hl.toml"), "[artifacts\nenabled = ").unwrap();
    fs::write(dir.path().join("prog.hl"), "x : integer ;\n").unwrap();

    let output = hl(dir.path(), &["prog.hl"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).starts_with("An unexpected error occurred: "));
}

#[test]
fn test_missing_argument_prints_usage() {
    let dir = tempdir().unwrap();
    let output = hl(dir.path(), &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_too_many_arguments_prints_usage() {
    let dir = tempdir().unwrap();
    let output = hl(dir.path(), &["a.hl", "b.hl"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_out_dir_and_no_artifacts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("prog.hl"), "v : double ;\n").unwrap();
    fs::create_dir(dir.path().join("out")).unwrap();

    let output = hl(dir.path(), &["prog.hl", "--out-dir", "out"]);
    assert!(output.status.success());
    assert!(dir.path().join("out").join("NOSPACES.TXT").exists());
    assert!(!dir.path().join("NOSPACES.TXT").exists());

    let output = hl(dir.path(), &["prog.hl", "--no-artifacts"]);
    assert!(output.status.success());
    assert!(!dir.path().join("NOSPACES.TXT").exists());
}

#[test]
fn test_json_format() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("prog.hl"), "output << y ;\n").unwrap();

    let output = hl(dir.path(), &["prog.hl", "--format", "json", "--no-artifacts"]);
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["verdict"], "ERROR");
    assert_eq!(json["errors"][0]["code"], "E002");
}

#[test]
fn test_explain_keeps_verdict_on_stdout() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("prog.hl"), "a : integer ;\na := 1.25 ;\n").unwrap();

    let output = hl(dir.path(), &["prog.hl", "--explain", "--no-artifacts"]);
    assert_eq!(stdout(&output), "ERROR\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot assign '1.25' to 'a' of type integer"));
}
