// src/commands/mod.rs
pub mod cd;
pub mod exit_cmd;
pub mod help_cmd;
pub mod ls;
pub mod mkdir;
pub mod pwd;
pub mod read;
pub mod registry;
pub mod rm;
pub mod rmdir_cmd;
pub mod touch;
pub mod types;
pub mod write;

pub use registry::{create_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};
