// keywrap/tests/cli_integration_tests.rs
//! Integration tests for the `keywrap` binary.
//!
//! Each test runs the binary inside a fresh temporary directory, so the fixed
//! relative target path resolves to a scratch copy of `WebAPI.cpp`.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

use keywrap::TARGET_FILE;

const WEBAPI_SNIPPET: &str = r#"void WebStatistics::handle_message(const Json::Value& message) {
	Json::Value response;
	if(message["type"].asString() == "request") {
		response["type"] = "response";
		response["code"] = message["code"];
		response["statistics"]["instances"] = to_string(stats->instances);
		response["statistics"]["servers"] = to_string(stats->servers);
		response["history"][index] = entry;
	}
}
"#;

const WEBAPI_PATCHED: &str = r#"void WebStatistics::handle_message(const Json::Value& message) {
	Json::Value response;
	if(message[std::string("type")].asString() == "request") {
		response[std::string("type")] = "response";
		response[std::string("code")] = message[std::string("code")];
		response[std::string("statistics")][std::string("instances")] = to_string(stats->instances);
		response[std::string("statistics")][std::string("servers")] = to_string(stats->servers);
		response[std::string("history")][index] = entry;
	}
}
"#;

/// Creates a temp working directory holding the target file with `contents`.
fn workspace_with_target(contents: &str) -> Result<(TempDir, PathBuf)> {
    let dir = tempdir()?;
    let target = dir.path().join(TARGET_FILE);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, contents)?;
    Ok((dir, target))
}

fn keywrap_in(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("keywrap"));
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_patches_target_and_prints_status_lines() -> Result<()> {
    let (dir, target) = workspace_with_target(WEBAPI_SNIPPET)?;

    keywrap_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("Patching {}\nDone.\n", TARGET_FILE)));

    assert_eq!(fs::read_to_string(&target)?, WEBAPI_PATCHED);
    Ok(())
}

#[test]
fn test_second_run_leaves_file_unchanged() -> Result<()> {
    let (dir, target) = workspace_with_target(WEBAPI_SNIPPET)?;

    keywrap_in(dir.path()).assert().success();
    keywrap_in(dir.path()).assert().success();

    assert_eq!(fs::read_to_string(&target)?, WEBAPI_PATCHED);
    Ok(())
}

#[test]
fn test_file_without_matches_is_byte_identical() -> Result<()> {
    let contents = "int main() {\n\treturn values[0] + map[key];\n}\n";
    let (dir, target) = workspace_with_target(contents)?;

    keywrap_in(dir.path()).assert().success();

    assert_eq!(fs::read_to_string(&target)?, contents);
    Ok(())
}

#[test]
fn test_missing_target_fails_after_first_status_line() -> Result<()> {
    let dir = tempdir()?;

    keywrap_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::diff(format!("Patching {}\n", TARGET_FILE)))
        .stderr(predicate::str::contains("Failed to read").and(predicate::str::contains("WebAPI.cpp")));
    Ok(())
}

#[test]
fn test_debug_flag_logs_rewrites_to_stderr() -> Result<()> {
    let (dir, _target) = workspace_with_target("obj[\"key\"];\n")?;

    keywrap_in(dir.path())
        .arg("--debug")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("Patching {}\nDone.\n", TARGET_FILE)))
        .stderr(predicate::str::contains("fixed point reached"));
    Ok(())
}

#[test]
fn test_quiet_flag_silences_logging() -> Result<()> {
    let (dir, _target) = workspace_with_target("obj[\"key\"];\n")?;

    keywrap_in(dir.path())
        .env("RUST_LOG", "debug")
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_rejects_path_argument() {
    let dir = tempdir().unwrap();

    keywrap_in(dir.path())
        .arg("other.cpp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
