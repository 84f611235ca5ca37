// src/commands/pwd/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn summary(&self) -> &'static str {
        "current directory"
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(format!("{}\n", ctx.fs.current_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::RamFs;

    #[test]
    fn test_pwd_root() {
        let mut fs = RamFs::new();
        let result = PwdCommand.execute(CommandContext::new(vec![], &mut fs));
        assert_eq!(result.stdout, "/\n");
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_pwd_nested() {
        let mut fs = RamFs::new();
        fs.make_dir("a").unwrap();
        fs.change_dir("a").unwrap();
        fs.make_dir("b").unwrap();
        fs.change_dir("b").unwrap();
        let result = PwdCommand.execute(CommandContext::new(vec!["ignored".to_string()], &mut fs));
        assert_eq!(result.stdout, "/a/b\n");
    }
}
