//! Project layout check.

use std::path::{Path, PathBuf};

use crate::ui::UserInterface;

use super::Check;

/// Reports which layout directories exist under the project root.
///
/// Missing directories are expected on a fresh checkout, so this check
/// warns about them but always passes.
pub struct DirectoryCheck<'a> {
    root: &'a Path,
    directories: &'a [String],
}

impl<'a> DirectoryCheck<'a> {
    pub fn new(root: &'a Path, directories: &'a [String]) -> Self {
        Self { root, directories }
    }

    fn resolve(&self, directory: &str) -> PathBuf {
        self.root.join(directory)
    }

    /// Configured directories that are absent or not directories.
    pub fn missing(&self) -> Vec<&str> {
        self.directories
            .iter()
            .map(String::as_str)
            .filter(|d| !self.resolve(d).is_dir())
            .collect()
    }
}

impl Check for DirectoryCheck<'_> {
    fn name(&self) -> &str {
        "directories"
    }

    fn title(&self) -> &str {
        "Checking directory structure"
    }

    fn run(&self, ui: &mut dyn UserInterface) -> bool {
        for directory in self.directories {
            let path = self.resolve(directory);
            if path.is_dir() {
                ui.success(&format!("{}/", directory));
            } else {
                tracing::debug!("{} is missing", path.display());
                ui.warning(&format!(
                    "{}/ NOT FOUND (will be created when needed)",
                    directory
                ));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn layout() -> Vec<String> {
        ["data", "data/raw", "notebooks", "src"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn passes_with_nothing_present() {
        let temp = TempDir::new().unwrap();
        let dirs = layout();
        let check = DirectoryCheck::new(temp.path(), &dirs);
        let mut ui = MockUI::new();

        assert!(check.run(&mut ui));
        assert_eq!(ui.warnings().len(), 4);
        assert!(ui.has_warning("data/raw/ NOT FOUND (will be created when needed)"));
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn passes_with_everything_present() {
        let temp = TempDir::new().unwrap();
        let dirs = layout();
        for dir in &dirs {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        let check = DirectoryCheck::new(temp.path(), &dirs);
        let mut ui = MockUI::new();

        assert!(check.run(&mut ui));
        assert!(ui.warnings().is_empty());
        assert_eq!(
            ui.successes(),
            &["data/", "data/raw/", "notebooks/", "src/"]
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()[..]
        );
    }

    #[test]
    fn reports_partial_layout() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("data")).unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        let dirs = layout();
        let check = DirectoryCheck::new(temp.path(), &dirs);

        assert_eq!(check.missing(), vec!["data/raw", "notebooks"]);

        let mut ui = MockUI::new();
        assert!(check.run(&mut ui));
        assert!(ui.has_success("data/"));
        assert!(ui.has_warning("notebooks/ NOT FOUND"));
    }

    #[test]
    fn missing_directory_is_a_warning_even_when_quiet() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("data")).unwrap();
        let dirs = vec!["data".to_string(), "models".to_string()];
        let check = DirectoryCheck::new(temp.path(), &dirs);
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        assert!(check.run(&mut ui));
        assert_eq!(
            ui.warnings(),
            &["models/ NOT FOUND (will be created when needed)".to_string()]
        );
        assert_eq!(ui.successes(), &["data/".to_string()]);
    }

    #[test]
    fn regular_file_does_not_count() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notebooks"), "not a directory").unwrap();
        let dirs = vec!["notebooks".to_string()];
        let check = DirectoryCheck::new(temp.path(), &dirs);
        let mut ui = MockUI::new();

        assert!(check.run(&mut ui));
        assert!(ui.has_warning("notebooks/ NOT FOUND"));
    }
}
