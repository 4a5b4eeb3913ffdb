//! Remediation hints and the next-steps guide.

/// Hint shown when the interpreter is too old or missing.
pub fn upgrade_python(minimum: &str) -> String {
    format!("Please upgrade to Python {} or higher.", minimum)
}

/// Hint shown when no interpreter could be launched.
pub fn install_python() -> &'static str {
    "Install Python, or point --python (or RECOM_PYTHON) at an interpreter."
}

/// Lines shown when `.git` is missing.
pub fn init_git() -> &'static [&'static str] {
    &["   Run: git init"]
}

/// Lines shown when a git identity read fails.
pub fn configure_git() -> &'static [&'static str] {
    &[
        "   Configure with:",
        "   git config --global user.name \"Your Name\"",
        "   git config --global user.email \"your.email@example.com\"",
    ]
}

/// Common fixes printed after a failed run.
///
/// `directories` is the configured directory list; the mkdir hint is
/// omitted when it is empty.
pub fn common_fixes(directories: &[String]) -> Vec<String> {
    let mut fixes = vec![
        "- Install packages: pip install -r requirements.txt".to_string(),
        "- Initialize git: git init".to_string(),
    ];
    if !directories.is_empty() {
        fixes.push(format!(
            "- Create directories: mkdir -p {}",
            directories.join(" ")
        ));
    }
    fixes
}

/// The guide printed when every check passed.
pub fn next_steps(project_name: &str) -> String {
    format!(
        r#"
1. ✅ Environment setup complete!

2. Start Jupyter Notebook:
   jupyter notebook

3. Create your first notebook in the notebooks/ directory

4. Begin Phase 0: Data Acquisition and Exploration
   - Choose a dataset (Last.fm, Million Song, or synthetic)
   - Perform exploratory data analysis
   - Understand the data characteristics

5. Commit your initial setup to git:
   git add .
   git commit -m "Initial project setup"
   git remote add origin https://github.com/YOUR_USERNAME/{project}.git
   git push -u origin main

Happy coding! 🎵
"#,
        project = project_name
    )
}
