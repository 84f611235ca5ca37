// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn summary(&self) -> &'static str {
        "list contents"
    }

    fn usage(&self) -> &'static str {
        "ls <dir-name>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(format!(
                "Usage: {}\nList directory contents, one name per line. Defaults to '.'.\n\
                 A file lists as its own name.\n",
                self.usage()
            ));
        }

        let path = ctx.operand().unwrap_or(".");
        match ctx.fs.list(path) {
            Ok(names) => {
                let mut stdout = String::new();
                for name in names {
                    stdout.push_str(&name);
                    stdout.push('\n');
                }
                CommandResult::success(stdout)
            }
            Err(e) => CommandResult::fs_error("ls", &e),
        }
    }
}
