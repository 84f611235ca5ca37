// src/commands/rm/mod.rs
use tracing::debug;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn summary(&self) -> &'static str {
        "delete file / dir"
    }

    fn usage(&self) -> &'static str {
        "rm <file-name> / <dir-name>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(format!(
                "Usage: {}\nRemove a file or a directory (with everything below it)\n\
                 from the current directory. Absent names are ignored.\n",
                self.usage()
            ));
        }

        let Some(name) = ctx.operand().map(str::to_string) else {
            return CommandResult::missing_operand("rm");
        };

        match ctx.fs.remove_node(&name) {
            Ok(removed) => {
                if !removed {
                    debug!("rm: nothing named '{}' in {}", name, ctx.fs.current_path());
                }
                CommandResult::default()
            }
            Err(e) => CommandResult::fs_error("rm", &e),
        }
    }
}
