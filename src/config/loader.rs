//! Configuration file discovery and loading.

use crate::config::schema::VerifyConfig;
use crate::error::{Result, VerifyError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project-level settings.
pub const CONFIG_DIR: &str = ".recom";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "verify.yml";

/// Default config location for a project root.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load the configuration for a run.
///
/// An explicit path must exist. Without one, `.recom/verify.yml` under the
/// project root is used if present, else the built-in defaults.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<VerifyConfig> {
    let path = match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_root.join(path)
            };
            if !path.is_file() {
                return Err(VerifyError::ConfigNotFound { path });
            }
            path
        }
        None => {
            let path = default_config_path(project_root);
            if !path.is_file() {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(VerifyConfig::default());
            }
            path
        }
    };

    let config = load_config_file(&path)?;
    validate(&config)?;
    Ok(config)
}

/// Load and parse a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VerifyConfig> {
    tracing::debug!("Loading config from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => VerifyError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => VerifyError::Io(e),
    })?;

    // An empty file deserializes as YAML null, not as an empty mapping.
    if content.trim().is_empty() {
        return Ok(VerifyConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|e| VerifyError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reject values that would make a check meaningless.
pub fn validate(config: &VerifyConfig) -> Result<()> {
    for dep in &config.dependencies {
        if dep.name.trim().is_empty() {
            return invalid("dependency names must not be empty");
        }
        if dep.import_name().trim().is_empty() {
            return invalid(format!("dependency '{}' has an empty import", dep.name));
        }
    }

    for dir in &config.directories {
        if dir.trim().is_empty() {
            return invalid("directory entries must not be empty");
        }
        if Path::new(dir).is_absolute() {
            return invalid(format!(
                "directory '{}' must be relative to the project root",
                dir
            ));
        }
    }

    if config.git.program.trim().is_empty() {
        return invalid("git.program must not be empty");
    }
    if config.git.config_keys.is_empty() {
        return invalid("git.config_keys must list at least one key");
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> Result<()> {
    Err(VerifyError::ConfigValidationError {
        message: message.into(),
    })
}
