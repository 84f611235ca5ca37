// src/commands/types.rs
use crate::fs::{FsError, RamFs};

/// Outcome of running one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    /// Set by `exit`; the session stops reading input after this command.
    pub exit_requested: bool,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, ..Default::default() }
    }

    pub fn error(stderr: String) -> Self {
        Self { stderr, exit_code: 1, ..Default::default() }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code, exit_requested: false }
    }

    pub fn exit(stdout: String) -> Self {
        Self { stdout, exit_requested: true, ..Default::default() }
    }

    /// Render a namespace failure as `<command>: <error>`.
    pub fn fs_error(command: &str, err: &FsError) -> Self {
        Self::error(format!("{}: {}\n", command, err))
    }

    pub fn missing_operand(command: &str) -> Self {
        Self::error(format!("{}: missing operand\n", command))
    }
}

/// Everything a command may touch: its arguments and the session's tree.
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub fs: &'a mut RamFs,
}

impl<'a> CommandContext<'a> {
    pub fn new(args: Vec<String>, fs: &'a mut RamFs) -> Self {
        Self { args, fs }
    }

    /// First argument, if any.
    pub fn operand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// `--help` only counts as the first argument, so it can still be an
    /// operand or content word later on.
    pub fn wants_help(&self) -> bool {
        self.operand() == Some("--help")
    }
}

/// A named command the session can dispatch to.
pub trait Command {
    fn name(&self) -> &'static str;
    /// Short description for the `help` table.
    fn summary(&self) -> &'static str;
    /// One-line usage shown by `help` and `--help`.
    fn usage(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_constructors() {
        let ok = CommandResult::success("x\n".to_string());
        assert_eq!(ok.exit_code, 0);
        assert!(!ok.exit_requested);

        let err = CommandResult::missing_operand("mkdir");
        assert_eq!(err.stderr, "mkdir: missing operand\n");
        assert_eq!(err.exit_code, 1);

        let bye = CommandResult::exit("bye\n".to_string());
        assert!(bye.exit_requested);
        assert_eq!(bye.exit_code, 0);
    }

    #[test]
    fn test_context_operand() {
        let mut fs = RamFs::new();
        let ctx = CommandContext::new(vec!["a".to_string(), "--help".to_string()], &mut fs);
        assert_eq!(ctx.operand(), Some("a"));
        assert!(!ctx.wants_help());

        let ctx = CommandContext::new(vec!["--help".to_string()], &mut fs);
        assert!(ctx.wants_help());
    }
}
