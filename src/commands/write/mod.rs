// src/commands/write/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct WriteCommand;

impl Command for WriteCommand {
    fn name(&self) -> &'static str {
        "write"
    }

    fn summary(&self) -> &'static str {
        "write to file"
    }

    fn usage(&self) -> &'static str {
        "write <file-name> <contents>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.len() == 1 && ctx.wants_help() {
            return CommandResult::success(format!(
                "Usage: {}\nReplace the content of a file. Remaining words are joined\n\
                 with single spaces; no words writes empty content.\n",
                self.usage()
            ));
        }

        let Some((path, words)) = ctx.args.split_first() else {
            return CommandResult::missing_operand("write");
        };
        let content = words.join(" ");

        match ctx.fs.write(path, &content) {
            Ok(()) => CommandResult::default(),
            Err(e) => CommandResult::fs_error("write", &e),
        }
    }
}
