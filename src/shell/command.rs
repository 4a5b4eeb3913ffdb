//! External program execution.

use crate::error::{Result, VerifyError};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Result of executing an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }

    /// Convert a non-zero exit into [`VerifyError::CommandFailed`].
    pub fn into_success(self, command: &str) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(VerifyError::CommandFailed {
                command: command.to_string(),
                code: self.exit_code,
            })
        }
    }
}

/// Options for program execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,
}

/// Run `program` with `args` and capture its output.
///
/// The program is spawned directly, without a shell. Blocks until the child
/// exits. A program that cannot be found yields [`VerifyError::ToolNotFound`];
/// a non-zero exit is reported through [`CommandResult::success`], not as an
/// error.
pub fn run<S: AsRef<OsStr>>(
    program: &OsStr,
    args: &[S],
    options: &CommandOptions,
) -> Result<CommandResult> {
    let start = Instant::now();
    let rendered = display_command(program, args);
    tracing::debug!("Running: {}", rendered);

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().map_err(|e| match e.kind() {
        ErrorKind::NotFound => VerifyError::ToolNotFound {
            tool: program.to_string_lossy().to_string(),
        },
        _ => VerifyError::CommandFailed {
            command: rendered.clone(),
            code: None,
        },
    })?;

    let elapsed = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        "'{}' exited with {:?} after {:?}",
        rendered,
        output.status.code(),
        elapsed
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}

/// Render a program and its arguments for logs and error messages.
pub fn display_command<S: AsRef<OsStr>>(program: &OsStr, args: &[S]) -> String {
    let mut parts = vec![program.to_string_lossy().to_string()];
    parts.extend(args.iter().map(|a| a.as_ref().to_string_lossy().to_string()));
    parts.join(" ")
}
