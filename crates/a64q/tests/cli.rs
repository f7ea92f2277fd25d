//! End-to-end tests for the `a64q` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

fn a64q(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_a64q"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run a64q")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_op_prints_every_match() {
    let output = a64q(&["--op", "0x910003E0"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), ["ADD x0, sp, #0x0", "MOV x0, sp"]);
}

#[test]
fn test_op_accepts_separators_and_binary() {
    let hex = a64q(&["--op", "0x91:00:03:E0"]);
    let bin = a64q(&["--op", "0b10010001_00000000_00000011_11100000"]);
    assert_eq!(stdout_lines(&hex), stdout_lines(&bin));
    assert_eq!(stdout_lines(&bin)[0], "ADD x0, sp, #0x0");
}

#[test]
fn test_op_no_match() {
    let output = a64q(&["--op", "0x00000000"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("No matching instruction found for opcode: 0x00000000"));
}

#[test]
fn test_op_invalid_literal() {
    for literal in ["91000000", "0xZZ", "0x", "0x1D503201F"] {
        let output = a64q(&["--op", literal]);
        assert_eq!(output.status.code(), Some(1), "literal {literal}");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_op_truncate() {
    let output = a64q(&["--op", "0x1D503201F", "--truncate"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), ["NOP", "HINT #0x0"]);
}

#[test]
fn test_op_parallel_matches_sequential() {
    for opcode in ["0xAA0103E0", "0x9AC02000", "0xD503201F"] {
        let sequential = a64q(&["--op", opcode]);
        let parallel = a64q(&["--op", opcode, "--parallel"]);
        assert_eq!(sequential.stdout, parallel.stdout);
    }
}

#[test]
fn test_op_json() {
    let output = a64q(&["--op", "0xD503201F", "--format", "json"]);
    assert_eq!(
        stdout_lines(&output),
        [
            r#"{"opcode":"0xd503201f","mnemonic":"NOP","encoding":"NOP_HI_hints","asm":"NOP"}"#,
            r#"{"opcode":"0xd503201f","mnemonic":"HINT","encoding":"HINT_HM_hints","asm":"HINT #0x0"}"#,
        ]
    );
}

#[test]
fn test_mnemonic_lookup() {
    let output = a64q(&["--n", "nop"]);
    assert_eq!(output.status.code(), Some(0));
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Mnemonic: NOP"));
    assert!(text.contains("[1] Encoding: NOP_HI_hints"));
    assert!(text.contains("Binary Pattern:  1101 0101 0000 0011 0010 0000 0001 1111"));
    assert!(text.contains("Hex Pattern:     0xd503201f"));
    assert!(text.contains("[31:30] = 1 (fixed)"));
}

#[test]
fn test_mnemonic_unknown() {
    let output = a64q(&["--n", "FROB"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("No instruction found with mnemonic: FROB"));
}

#[test]
fn test_hint_lists_templates() {
    let output = a64q(&["--hint", "0xD503_2XXX"]);
    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.first().map(String::as_str), Some("NOP"));
    assert_eq!(lines.last().map(String::as_str), Some("HINT  #<imm>"));
}

#[test]
fn test_hint_no_match() {
    let output = a64q(&["--hint", "0x0000XXXX"]);
    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("No matching instruction found for partial opcode: 0x0000XXXX"));
    assert!(err.contains("Binary: 0000 0000 0000 0000 XXXX XXXX XXXX XXXX"));
}

#[test]
fn test_usage_errors_exit_one() {
    assert_eq!(a64q(&[]).status.code(), Some(1));
    assert_eq!(a64q(&["--bogus"]).status.code(), Some(1));
    assert_eq!(a64q(&["--op"]).status.code(), Some(1));
    assert_eq!(a64q(&["--op", "0x0", "--n", "ADD"]).status.code(), Some(1));
}

#[test]
fn test_help_and_version_exit_zero() {
    let help = a64q(&["--help"]);
    assert_eq!(help.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&help.stdout).contains("--hint"));
    assert_eq!(a64q(&["--version"]).status.code(), Some(0));
}

#[test]
fn test_catalog_file() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/hints.tsv");
    let path = path.to_str().expect("utf-8 path");
    let output = a64q(&["--catalog", path, "--op", "0xD503203F"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), ["YIELD", "HINT #0x1"]);

    let output = a64q(&["--catalog", "/nonexistent/catalog.tsv", "--op", "0x0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load catalog"));
}
