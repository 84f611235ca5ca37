// src/commands/cd/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn summary(&self) -> &'static str {
        "navigate to dir"
    }

    fn usage(&self) -> &'static str {
        "cd <dir-name>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(format!(
                "Usage: {}\nChange the current directory. Defaults to '.'.\n",
                self.usage()
            ));
        }

        let path = ctx.operand().unwrap_or(".").to_string();
        match ctx.fs.change_dir(&path) {
            Ok(()) => CommandResult::default(),
            Err(e) => CommandResult::fs_error("cd", &e),
        }
    }
}
