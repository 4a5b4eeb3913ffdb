//! Executable lookup on PATH.
//!
//! Lookup walks PATH entries directly instead of shelling out to `which`,
//! whose behavior varies across systems.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. The platform's
/// executable suffix (`.exe` on Windows) is appended to `tool`.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let file_name = format!("{}{}", tool, std::env::consts::EXE_SUFFIX);
    for dir in path_entries {
        let candidate = dir.join(&file_name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Resolve the first of `candidates` found on PATH.
pub fn resolve_first(candidates: &[&str], path_entries: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find_map(|tool| resolve_tool_path(tool, path_entries))
}
