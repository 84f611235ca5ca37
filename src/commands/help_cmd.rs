use crate::commands::{Command, CommandContext, CommandResult};

/// Prints the command table. Rows are collected from the other registered
/// commands when the registry is built.
pub struct HelpCommand {
    rows: Vec<(&'static str, &'static str)>,
}

impl HelpCommand {
    pub fn new(rows: Vec<(&'static str, &'static str)>) -> Self {
        Self { rows }
    }
}

const NOTES: &str = "Notes:
- Current directory is represented by `.`
- Parent directory is represented by `..`
- Paths starting with `/` are absolute
";

/// Render the command table with columns padded to the widest entry.
fn render_table(rows: &[(&str, &str)]) -> String {
    let left = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0).max("Command".len());
    let right = rows.iter().map(|(_, r)| r.len()).max().unwrap_or(0).max("Usage".len());
    let border = format!("+-{}-+-{}-+\n", "-".repeat(left), "-".repeat(right));

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&format!("| {:<left$} | {:<right$} |\n", "Command", "Usage"));
    out.push_str(&border);
    for (label, usage) in rows {
        out.push_str(&format!("| {:<left$} | {:<right$} |\n", label, usage));
    }
    out.push_str(&border);
    out
}

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn summary(&self) -> &'static str {
        "show this table"
    }

    fn usage(&self) -> &'static str {
        "help"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help" || a == "-h") {
            return CommandResult::success(
                "help - display available commands\n\nUsage: help\n".to_string(),
            );
        }

        CommandResult::success(format!("{}\n{}", render_table(&self.rows), NOTES))
    }
}
