// src/commands/read/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct ReadCommand;

impl Command for ReadCommand {
    fn name(&self) -> &'static str {
        "read"
    }

    fn summary(&self) -> &'static str {
        "read file"
    }

    fn usage(&self) -> &'static str {
        "read <file-name>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(format!(
                "Usage: {}\nPrint the content of a file.\n",
                self.usage()
            ));
        }

        let Some(path) = ctx.operand() else {
            return CommandResult::missing_operand("read");
        };

        match ctx.fs.read(path) {
            Ok(content) => CommandResult::success(format!("{}\n", content)),
            Err(e) => CommandResult::fs_error("read", &e),
        }
    }
}
