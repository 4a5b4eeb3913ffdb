//! Configuration schema.
//!
//! Every field has a built-in default, so an empty or absent file yields
//! the stock ReCom checks.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::python::PythonVersion;
use crate::ui::OutputMode;

/// Root configuration structure for `.recom/verify.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyConfig {
    /// Project name shown in the banner and next-steps guide.
    pub project_name: String,

    /// Default output mode; `--verbose` / `--quiet` override it.
    pub output: OutputMode,

    /// Interpreter settings.
    pub python: PythonSettings,

    /// Libraries that must be importable, in report order.
    pub dependencies: Vec<DependencySpec>,

    /// Directories expected under the project root, in report order.
    pub directories: Vec<String>,

    /// Git settings.
    pub git: GitSettings,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            project_name: "ReCom".to_string(),
            output: OutputMode::default(),
            python: PythonSettings::default(),
            dependencies: default_dependencies(),
            directories: default_directories(),
            git: GitSettings::default(),
        }
    }
}

/// Interpreter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PythonSettings {
    /// Interpreter to use instead of searching PATH.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<PathBuf>,

    /// Oldest accepted `major.minor`.
    pub minimum_version: PythonVersion,
}

impl Default for PythonSettings {
    fn default() -> Self {
        Self {
            interpreter: None,
            minimum_version: PythonVersion::new(3, 9, 0),
        }
    }
}

/// One library to probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencySpec {
    /// Name shown in the report (usually the pip package name).
    pub name: String,

    /// Module to import when it differs from `name` (e.g. `IPython`).
    #[serde(default, rename = "import", skip_serializing_if = "Option::is_none")]
    pub import_name: Option<String>,
}

impl DependencySpec {
    /// Create an entry; `import_name` is stored only when it differs from `name`.
    pub fn new(name: &str, import_name: &str) -> Self {
        Self {
            name: name.to_string(),
            import_name: (name != import_name).then(|| import_name.to_string()),
        }
    }

    /// Module identifier passed to the interpreter.
    pub fn import_name(&self) -> &str {
        self.import_name.as_deref().unwrap_or(&self.name)
    }
}

/// Git settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitSettings {
    /// Git executable name or path.
    pub program: String,

    /// Configuration keys that must be readable, in report order.
    pub config_keys: Vec<String>,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            config_keys: vec!["user.name".to_string(), "user.email".to_string()],
        }
    }
}

fn default_dependencies() -> Vec<DependencySpec> {
    [
        ("numpy", "numpy"),
        ("pandas", "pandas"),
        ("scipy", "scipy"),
        ("matplotlib", "matplotlib"),
        ("seaborn", "seaborn"),
        ("jupyter", "jupyter"),
        ("ipython", "IPython"),
    ]
    .iter()
    .map(|(name, import)| DependencySpec::new(name, import))
    .collect()
}

fn default_directories() -> Vec<String> {
    [
        "data",
        "data/raw",
        "data/processed",
        "notebooks",
        "src",
        "models",
        "tests",
        "docs",
    ]
    .iter()
    .map(|d| d.to_string())
    .collect()
}
