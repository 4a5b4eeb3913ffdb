//! Integration tests for the recom-verify binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn verify_cmd(project: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("recom-verify"));
    cmd.current_dir(project.path());
    cmd.env_remove("RECOM_PYTHON");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_config(project: &TempDir, config: &str) {
    let dir = project.path().join(".recom");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("verify.yml"), config).unwrap();
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("recom-verify"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Verify that a ReCom development environment is ready to use",
        ))
        .stdout(predicate::str::contains("--python"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("recom-verify"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_flag() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("recom-verify"));
    cmd.arg("--frobnicate");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_unusable_interpreter_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = verify_cmd(&temp);
    cmd.arg("--python").arg(temp.path().join("no-such-python"));
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("ReCom Setup Verification"))
        .stdout(predicate::str::contains("CHECKING PYTHON VERSION"))
        .stdout(predicate::str::contains("VERIFICATION SUMMARY"))
        .stdout(predicate::str::contains("Git repository not initialized"))
        .stdout(predicate::str::contains("Common fixes:"));
    Ok(())
}

#[test]
fn cli_python_env_var_is_honored() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = verify_cmd(&temp);
    cmd.env("RECOM_PYTHON", temp.path().join("no-such-python"));
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("no-such-python"));
    Ok(())
}

#[test]
fn cli_quiet_hides_per_item_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = verify_cmd(&temp);
    cmd.arg("--quiet")
        .arg("--python")
        .arg(temp.path().join("no-such-python"));
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Setup Verification").not())
        .stdout(predicate::str::contains("CHECKING").not())
        .stdout(predicate::str::contains("data/ NOT FOUND"))
        .stdout(predicate::str::contains("Some checks failed"));
    Ok(())
}

#[test]
fn cli_invalid_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write_config(&temp, "git:\n  config_keys: []\n");
    let mut cmd = verify_cmd(&temp);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn cli_unknown_config_key_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write_config(&temp, "projct_name: typo\n");
    let mut cmd = verify_cmd(&temp);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_missing_explicit_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = verify_cmd(&temp);
    cmd.arg("--config").arg("nope.yml");
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn cli_project_flag_selects_root() -> Result<(), Box<dyn std::error::Error>> {
    let project = TempDir::new()?;
    write_config(&project, "project_name: Elsewhere\n");
    let cwd = TempDir::new()?;

    let mut cmd = verify_cmd(&cwd);
    cmd.arg("--project")
        .arg(project.path())
        .arg("--python")
        .arg(project.path().join("no-such-python"));
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Elsewhere Setup Verification"));
    Ok(())
}

#[cfg(unix)]
mod with_stub_tools {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// A python that reports `version` and imports everything, and a git
    /// with a configured identity.
    fn install_tools(tools: &TempDir, version: &str) -> (PathBuf, PathBuf) {
        let python = script(
            tools.path(),
            "python3",
            &format!(
                "case \"$2\" in\n  *version_info*) printf '{}\\nLinux\\n6.1.0\\n' ;;\n  *) echo 2.1.0 ;;\nesac\n",
                version
            ),
        );
        let git = script(
            tools.path(),
            "git",
            "case \"$2\" in\n  user.name) echo Ada ;;\n  user.email) echo ada@example.com ;;\n  *) exit 1 ;;\nesac\n",
        );
        (python, git)
    }

    #[test]
    fn cli_complete_setup_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
        let tools = TempDir::new()?;
        let (python, git) = install_tools(&tools, "3.13.0");

        let project = TempDir::new()?;
        write_config(&project, &format!("git:\n  program: {}\n", git.display()));
        for dir in [
            "data",
            "data/raw",
            "data/processed",
            "notebooks",
            "src",
            "models",
            "tests",
            "docs",
        ] {
            fs::create_dir_all(project.path().join(dir))?;
        }
        fs::create_dir(project.path().join(".git"))?;

        let mut cmd = verify_cmd(&project);
        cmd.arg("--python").arg(&python);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Current Python version: 3.13.0"))
            .stdout(predicate::str::contains("(version: 2.1.0)"))
            .stdout(predicate::str::contains("Git user.email: ada@example.com"))
            .stdout(predicate::str::contains("All checks passed!"))
            .stdout(predicate::str::contains("NEXT STEPS"));
        Ok(())
    }

    #[test]
    fn cli_fresh_checkout_exits_one() -> Result<(), Box<dyn std::error::Error>> {
        let tools = TempDir::new()?;
        let (python, _) = install_tools(&tools, "3.11.4");
        let project = TempDir::new()?;

        let mut cmd = verify_cmd(&project);
        cmd.arg("--python").arg(&python);
        cmd.assert()
            .code(1)
            .stdout(predicate::str::contains("Python version is compatible!"))
            .stdout(predicate::str::contains(
                "data/ NOT FOUND (will be created when needed)",
            ))
            .stdout(predicate::str::contains("Git repository not initialized"))
            .stdout(predicate::str::contains("Some checks failed"));
        Ok(())
    }

    #[test]
    fn cli_old_python_exits_one() -> Result<(), Box<dyn std::error::Error>> {
        let tools = TempDir::new()?;
        let (python, _) = install_tools(&tools, "3.8.18");
        let project = TempDir::new()?;

        let mut cmd = verify_cmd(&project);
        cmd.arg("--python").arg(&python);
        cmd.assert()
            .code(1)
            .stdout(predicate::str::contains("Python version is too old"));
        Ok(())
    }

    #[test]
    fn cli_python_four_zero_exits_one() -> Result<(), Box<dyn std::error::Error>> {
        let tools = TempDir::new()?;
        let (python, _) = install_tools(&tools, "4.0.0");
        let project = TempDir::new()?;

        let mut cmd = verify_cmd(&project);
        cmd.arg("--python").arg(&python);
        cmd.assert()
            .code(1)
            .stdout(predicate::str::contains("Current Python version: 4.0.0"))
            .stdout(predicate::str::contains("Python version is too old"));
        Ok(())
    }
}
