// src/commands/touch/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn summary(&self) -> &'static str {
        "make file"
    }

    fn usage(&self) -> &'static str {
        "touch <file-name>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(format!(
                "Usage: {}\nCreate an empty file in the current directory.\n",
                self.usage()
            ));
        }

        let Some(name) = ctx.operand().map(str::to_string) else {
            return CommandResult::missing_operand("touch");
        };

        match ctx.fs.make_file(&name) {
            Ok(_) => CommandResult::default(),
            Err(e) => CommandResult::fs_error("touch", &e),
        }
    }
}
