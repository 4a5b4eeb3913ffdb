//! External program execution and PATH lookup.

pub mod command;
pub mod path;

pub use command::{display_command, run, CommandOptions, CommandResult};
pub use path::{is_executable, parse_system_path, resolve_first, resolve_tool_path};
