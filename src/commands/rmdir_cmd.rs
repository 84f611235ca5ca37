use tracing::debug;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct RmdirCommand;

const USAGE: &str = "Usage: rmdir <dir-name>
Remove a directory and everything below it from the current directory.
Absent names are ignored.";

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn summary(&self) -> &'static str {
        "delete directory"
    }

    fn usage(&self) -> &'static str {
        "rmdir <dir-name>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.wants_help() {
            return CommandResult::success(format!("{}\n", USAGE));
        }

        let Some(dir) = ctx.operand().map(str::to_string) else {
            return CommandResult::missing_operand("rmdir");
        };

        match ctx.fs.remove_dir(&dir) {
            Ok(true) => CommandResult::default(),
            Ok(false) => {
                debug!("rmdir: nothing named '{}' in {}", dir, ctx.fs.current_path());
                CommandResult::default()
            }
            Err(e) => CommandResult::fs_error("rmdir", &e),
        }
    }
}
