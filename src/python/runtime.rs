//! Python interpreter discovery and capability probes.
//!
//! A Rust process cannot import Python modules directly, so every question
//! about the Python environment is answered by spawning the interpreter with
//! a small fixed program and reading what it prints.
//!
//! # Example
//!
//! ```no_run
//! use recom_verify::python::{Interpreter, PythonRuntime};
//!
//! let interpreter = Interpreter::discover(None).expect("python on PATH");
//! let info = interpreter.info().unwrap();
//! println!("{} on {}", info.version, info.system);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{anyhow, Context};
use regex::Regex;

use crate::error::{Result, VerifyError};
use crate::shell::{self, CommandOptions};

use super::version::PythonVersion;

/// Interpreter names tried on PATH, in order.
pub const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];

/// Prints version, OS name and OS release on three lines.
const INFO_PROGRAM: &str = "import platform, sys; \
print('%d.%d.%d' % tuple(sys.version_info[:3])); \
print(platform.system()); \
print(platform.release())";

/// Imports `sys.argv[1]` and prints its `__version__`, or `unknown`.
const IMPORT_PROGRAM: &str = "import importlib, sys; \
m = importlib.import_module(sys.argv[1]); \
print(getattr(m, '__version__', 'unknown'))";

static RE_MODULE_NOT_FOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ModuleNotFoundError: No module named '([^']+)'").unwrap());

/// What the interpreter reports about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterInfo {
    /// Path of the interpreter that answered.
    pub program: PathBuf,
    pub version: PythonVersion,
    /// `platform.system()`, e.g. `Linux` or `Darwin`.
    pub system: String,
    /// `platform.release()`, e.g. `6.1.0`.
    pub release: String,
}

/// Outcome of probing one importable module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleStatus {
    /// The module imported. `version` is `__version__` or `unknown`.
    Found { version: String },
    /// The module could not be imported.
    Missing {
        /// Short reason, e.g. `No module named 'seaborn'`.
        reason: Option<String>,
    },
}

/// Source of facts about a Python environment.
///
/// Checks depend on this trait rather than on a concrete interpreter so
/// they can be exercised without Python installed.
pub trait PythonRuntime {
    /// Query the interpreter's version and platform.
    fn info(&self) -> Result<InterpreterInfo>;

    /// Try to import `import_name`. Never fails: any problem is `Missing`.
    fn probe_module(&self, import_name: &str) -> ModuleStatus;
}

/// A Python interpreter on disk.
#[derive(Debug, Clone)]
pub struct Interpreter {
    program: PathBuf,
}

impl Interpreter {
    /// Use a specific interpreter binary.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Locate an interpreter.
    ///
    /// An explicit override wins. Otherwise the first executable of
    /// [`INTERPRETER_CANDIDATES`] on PATH is used.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(program) = explicit {
            tracing::debug!("Using configured interpreter {}", program.display());
            return Ok(Self::new(program));
        }

        let path = shell::parse_system_path();
        match shell::resolve_first(INTERPRETER_CANDIDATES, &path) {
            Some(program) => {
                tracing::debug!("Discovered interpreter {}", program.display());
                Ok(Self::new(program))
            }
            None => Err(VerifyError::ToolNotFound {
                tool: INTERPRETER_CANDIDATES.join(" or "),
            }),
        }
    }

    fn options() -> CommandOptions {
        let mut env = HashMap::new();
        // Probing must not leave __pycache__ behind in site-packages.
        env.insert("PYTHONDONTWRITEBYTECODE".to_string(), "1".to_string());
        CommandOptions { cwd: None, env }
    }
}

impl PythonRuntime for Interpreter {
    fn info(&self) -> Result<InterpreterInfo> {
        let program = self.program.as_os_str();
        let args = ["-c", INFO_PROGRAM];
        let result = shell::run(program, &args, &Self::options())?;
        let command = shell::display_command(program, &args);
        let result = result.into_success(&command)?;

        let (version, system, release) =
            parse_info_output(&result.stdout).map_err(|e| {
                tracing::warn!("Unexpected interpreter output: {:#}", e);
                VerifyError::ProbeOutput {
                    command,
                    message: format!("{:#}", e),
                }
            })?;
        Ok(InterpreterInfo {
            program: self.program.clone(),
            version,
            system,
            release,
        })
    }

    fn probe_module(&self, import_name: &str) -> ModuleStatus {
        let args = ["-c", IMPORT_PROGRAM, import_name];
        match shell::run(self.program.as_os_str(), &args, &Self::options()) {
            Ok(result) if result.success => {
                let version = result
                    .stdout
                    .lines()
                    .last()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .unwrap_or("unknown")
                    .to_string();
                tracing::debug!("{} imported (version {})", import_name, version);
                ModuleStatus::Found { version }
            }
            Ok(result) => {
                let reason = missing_reason(&result.stderr);
                tracing::debug!("{} failed to import: {:?}", import_name, reason);
                ModuleStatus::Missing { reason }
            }
            Err(e) => {
                tracing::debug!("Could not probe {}: {}", import_name, e);
                ModuleStatus::Missing {
                    reason: Some(e.to_string()),
                }
            }
        }
    }
}

/// Stand-in runtime used when no interpreter could be located.
///
/// Every query fails the same way, so each check still runs and reports
/// its own failure.
#[derive(Debug, Clone)]
pub struct MissingInterpreter {
    tool: String,
}

impl MissingInterpreter {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

impl PythonRuntime for MissingInterpreter {
    fn info(&self) -> Result<InterpreterInfo> {
        Err(VerifyError::ToolNotFound {
            tool: self.tool.clone(),
        })
    }

    fn probe_module(&self, _import_name: &str) -> ModuleStatus {
        ModuleStatus::Missing {
            reason: Some(format!("'{}' not found on PATH", self.tool)),
        }
    }
}

/// Locate an interpreter, falling back to [`MissingInterpreter`].
pub fn discover_runtime(explicit: Option<&Path>) -> Box<dyn PythonRuntime> {
    match Interpreter::discover(explicit) {
        Ok(interpreter) => Box::new(interpreter),
        Err(e) => {
            tracing::warn!("{}", e);
            Box::new(MissingInterpreter::new(INTERPRETER_CANDIDATES.join(" or ")))
        }
    }
}

/// Split the three lines printed by the info program.
pub fn parse_info_output(stdout: &str) -> anyhow::Result<(PythonVersion, String, String)> {
    let mut lines = stdout.lines().map(str::trim);

    let version_line = lines
        .next()
        .filter(|l| !l.is_empty())
        .ok_or_else(|| anyhow!("interpreter printed no version"))?;
    let version: PythonVersion = version_line
        .parse()
        .map_err(|e: String| anyhow!(e))
        .with_context(|| format!("reading interpreter version from {:?}", version_line))?;

    let system = lines.next().unwrap_or_default().to_string();
    let release = lines.next().unwrap_or_default().to_string();
    Ok((version, system, release))
}

/// Reduce an import traceback to its final line.
fn missing_reason(stderr: &str) -> Option<String> {
    if let Some(caps) = RE_MODULE_NOT_FOUND.captures(stderr) {
        return Some(format!("No module named '{}'", &caps[1]));
    }
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}
