use crate::commands::{Command, CommandContext, CommandResult};

pub struct ExitCommand;

pub const FAREWELL: &str = "Catchya Later:)";

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn summary(&self) -> &'static str {
        "leave"
    }

    fn usage(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::exit(format!("{}\n", FAREWELL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::RamFs;

    #[test]
    fn test_exit_requests_end() {
        let mut fs = RamFs::new();
        let result = ExitCommand.execute(CommandContext::new(vec![], &mut fs));
        assert!(result.exit_requested);
        assert_eq!(result.stdout, "Catchya Later:)\n");
    }
}
