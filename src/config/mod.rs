//! Configuration loading.
//!
//! Projects may commit `.recom/verify.yml` to adjust what is verified.
//! Every field is optional; missing fields fall back to the built-in
//! ReCom defaults.
//!
//! ```yaml
//! project_name: ReCom
//! output: normal            # verbose | normal | quiet
//! python:
//!   interpreter: /opt/python3.12/bin/python3
//!   minimum_version: "3.9"
//! dependencies:
//!   - name: numpy
//!   - name: ipython
//!     import: IPython
//! directories: [data, data/raw, notebooks]
//! git:
//!   program: git
//!   config_keys: [user.name, user.email]
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    default_config_path, load_config, load_config_file, validate, CONFIG_DIR, CONFIG_FILE,
};
pub use schema::{DependencySpec, GitSettings, PythonSettings, VerifyConfig};
