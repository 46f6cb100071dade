//! End-to-end tests for the CLI command layer.

use std::fs;

use clap::Parser;
use tempfile::TempDir;

use priznak::cli::args::PriznakArgs;
use priznak::cli::commands::execute_command;
use priznak::error::{PriznakError, Result};

fn write_phrases(dir: &TempDir, name: &str, phrases: &[&str]) -> String {
    let path = dir.path().join(name);
    fs::write(&path, phrases.join("\n")).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn classify_command_runs_over_a_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let input = write_phrases(
        &temp_dir,
        "phrases.txt",
        &[
            "Активно ищу работу, готов выйти завтра",
            "ищу работу в IT сфере",
            "начну работать завтра",
        ],
    );

    let args = PriznakArgs::try_parse_from([
        "priznak",
        "--quiet",
        "--format",
        "json",
        "classify",
        &input,
    ])
    .unwrap();

    execute_command(args)
}

#[test]
fn classify_command_accepts_improved_rules() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let input = write_phrases(&temp_dir, "phrases.txt", &["начну работать завтра"]);

    let args = PriznakArgs::try_parse_from([
        "priznak",
        "--quiet",
        "--format",
        "csv",
        "classify",
        &input,
        "--rules",
        "improved",
        "--normalize",
    ])
    .unwrap();

    execute_command(args)
}

#[test]
fn classify_command_fails_on_missing_file() {
    let args = PriznakArgs::try_parse_from([
        "priznak",
        "--quiet",
        "classify",
        "/nonexistent/phrases.txt",
    ])
    .unwrap();

    match execute_command(args) {
        Err(PriznakError::Io(_)) => {}
        other => panic!("Expected I/O error, got {other:?}"),
    }
}

#[test]
fn compare_command_runs_over_a_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let input = write_phrases(
        &temp_dir,
        "phrases.txt",
        &[
            "готов приступить сразу",
            "Активно ищет работу в области",
            "",
        ],
    );

    let args = PriznakArgs::try_parse_from([
        "priznak",
        "--quiet",
        "--format",
        "json",
        "--pretty",
        "compare",
        &input,
        "--skip-empty",
    ])
    .unwrap();

    execute_command(args)
}

#[test]
fn rules_command_lists_both_versions() -> Result<()> {
    for version in ["baseline", "improved"] {
        let args = PriznakArgs::try_parse_from([
            "priznak",
            "--quiet",
            "--format",
            "json",
            "rules",
            "--rules",
            version,
        ])
        .unwrap();
        execute_command(args)?;
    }
    Ok(())
}
