//! ReCom setup verification.
//!
//! `recom-verify` checks that a machine is ready to work on a ReCom
//! project: a recent enough Python, the scientific libraries importable,
//! the expected directory layout and a configured git repository.
//!
//! # Modules
//!
//! - [`checks`] - The individual environment checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.recom/verify.yml` loading and validation
//! - [`error`] - Error types and result aliases
//! - [`python`] - Interpreter discovery and import probes
//! - [`runner`] - Check orchestration and the summary report
//! - [`shell`] - External program execution and PATH lookup
//! - [`ui`] - Terminal output, status icons and spinners
//!
//! # Example
//!
//! ```
//! use recom_verify::checks::DirectoryCheck;
//! use recom_verify::runner::Verifier;
//! use recom_verify::ui::MockUI;
//!
//! let root = std::env::temp_dir();
//! let dirs = vec!["recom-verify-doc-missing".to_string()];
//! let verifier = Verifier::new("ReCom", dirs.clone())
//!     .with_check(DirectoryCheck::new(&root, &dirs));
//!
//! let mut ui = MockUI::new();
//! let report = verifier.run(&mut ui);
//! assert!(report.all_passed());
//! assert!(ui.has_warning("recom-verify-doc-missing/ NOT FOUND"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod python;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{Result, VerifyError};
