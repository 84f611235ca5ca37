// src/commands/mkdir/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn summary(&self) -> &'static str {
        "make directory"
    }

    fn usage(&self) -> &'static str {
        "mkdir <dir-name>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(format!(
                "Usage: {}\nCreate an empty directory in the current directory.\n",
                self.usage()
            ));
        }

        let Some(name) = ctx.operand().map(str::to_string) else {
            return CommandResult::missing_operand("mkdir");
        };

        match ctx.fs.make_dir(&name) {
            Ok(_) => CommandResult::default(),
            Err(e) => CommandResult::fs_error("mkdir", &e),
        }
    }
}
