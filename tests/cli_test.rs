//! Integration tests for the ccgen binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn ccgen(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("ccgen"));
    cmd.current_dir(dir);
    cmd.env_remove("CCGEN_SHELL");
    cmd.env_remove("CCGEN_FILE");
    cmd.env_remove("CCGEN_DIR");
    cmd.env_remove("CCGEN_LOG");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    ccgen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("code-generation commands"));
    Ok(())
}

#[test]
fn cli_help_names_the_shell_setting() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    ccgen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CCGEN_SHELL"))
        .stdout(predicate::str::contains("default /bin/sh"));
    Ok(())
}

#[test]
fn cli_invalid_log_filter_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "gen.c", "// ccgen: touch never.txt\n");
    ccgen(temp.path())
        .env("CCGEN_LOG", "ccgen=loud")
        .arg("gen.c")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid log filter 'ccgen=loud'"));
    assert!(!temp.path().join("never.txt").exists());
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    ccgen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_files_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    ccgen(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("FILE"));
    Ok(())
}

#[test]
fn cli_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    ccgen(temp.path())
        .arg("missing.c")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: Failed to resolve path missing.c"));
    Ok(())
}

#[test]
fn cli_file_without_directives_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "plain.c", "int main(void) { return 0; }\n// nothing here\n");
    ccgen(temp.path())
        .arg("plain.c")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_runs_line_directive() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "gen.c", "int x;\n// ccgen: echo hello > out.txt\n");
    ccgen(temp.path()).arg("gen.c").assert().success();
    assert_eq!(fs::read_to_string(temp.path().join("out.txt"))?, "hello\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_command_output_is_inherited() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "gen.c", "/* ccgen: echo generated */\n");
    ccgen(temp.path())
        .arg("gen.c")
        .assert()
        .success()
        .stdout("generated\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_failing_command_stops_batch() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(
        temp.path(),
        "first.c",
        "/* ccgen: false */\n// ccgen: echo unreachable\n",
    );
    write(temp.path(), "second.c", "// ccgen: echo never\n");
    ccgen(temp.path())
        .args(["first.c", "second.c"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("unreachable").not())
        .stdout(predicate::str::contains("never").not())
        .stderr(predicate::str::contains("Command failed with exit code 1"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_exit_code_matches_failing_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "gen.c", "// ccgen: exit 42\n");
    ccgen(temp.path()).arg("gen.c").assert().code(42);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_only_files_with_directives_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "a.c", "int a;\n");
    write(temp.path(), "b.c", "// ccgen: echo hi\n");
    ccgen(temp.path())
        .args(["a.c", "b.c"])
        .assert()
        .success()
        .stdout("hi\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_ccgen_dir_points_next_to_source() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "src/api.c", "// ccgen: touch $CCGEN_DIR/out.h\n");
    ccgen(temp.path()).arg("src/api.c").assert().success();
    assert!(temp.path().join("src/out.h").exists());
    assert!(!temp.path().join("out.h").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_ccgen_file_is_absolute() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(
        temp.path(),
        "sub/../gen.c",
        "// ccgen: printf '%s' \"$CCGEN_FILE\" > file.txt\n",
    );
    ccgen(temp.path()).arg("gen.c").assert().success();
    let recorded = fs::read_to_string(temp.path().join("file.txt"))?;
    assert_eq!(PathBuf::from(recorded), fs::canonicalize(temp.path().join("gen.c"))?);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_earlier_artifacts_are_visible_to_later_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "a.c", "// ccgen: echo data > shared.txt\n");
    write(temp.path(), "b.c", "// ccgen: test -f shared.txt\n");
    ccgen(temp.path()).args(["a.c", "b.c"]).assert().success();
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_respects_ccgen_shell() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "gen.c", "// ccgen: echo via-custom-shell\n");
    ccgen(temp.path())
        .env("CCGEN_SHELL", temp.path().join("no-such-shell"))
        .arg("gen.c")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to spawn command"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_debug_logging_goes_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "gen.c", "// ccgen: echo logged\n");
    ccgen(temp.path())
        .env("CCGEN_LOG", "ccgen=debug")
        .arg("gen.c")
        .assert()
        .success()
        .stdout("logged\n")
        .stderr(predicate::str::contains("dispatching 'echo logged'"))
        .stderr(predicate::str::contains("from line comment"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_piped_logs_have_no_ansi_escapes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "gen.c", "// ccgen: true\n");
    ccgen(temp.path())
        .env_remove("NO_COLOR")
        .env("CCGEN_LOG", "ccgen=debug")
        .arg("gen.c")
        .assert()
        .success()
        .stderr(predicate::str::contains("dispatching 'true'"))
        .stderr(predicate::str::contains("\u{1b}[").not());
    Ok(())
}
