//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap's derive macros
//! - [`verify`] - The verification command

pub mod args;
pub mod verify;

pub use args::Cli;
pub use verify::VerifyCommand;
