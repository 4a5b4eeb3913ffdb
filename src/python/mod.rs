//! Python environment inspection.
//!
//! - [`version`] - Interpreter version numbers and comparison
//! - [`runtime`] - The [`PythonRuntime`] trait and the subprocess-backed
//!   [`Interpreter`]

pub mod runtime;
pub mod version;

pub use runtime::{
    discover_runtime, parse_info_output, Interpreter, InterpreterInfo, MissingInterpreter,
    ModuleStatus, PythonRuntime, INTERPRETER_CANDIDATES,
};
pub use version::PythonVersion;
