// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cd::CdCommand;
use super::exit_cmd::ExitCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::pwd::PwdCommand;
use super::read::ReadCommand;
use super::rm::RmCommand;
use super::rmdir_cmd::RmdirCommand;
use super::touch::TouchCommand;
use super::write::WriteCommand;

/// Register every namespace command. `help` lists the others in the order
/// they are registered here.
pub fn register_all(registry: &mut CommandRegistry) {
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(MkdirCommand),
        Box::new(RmdirCommand),
        Box::new(TouchCommand),
        Box::new(RmCommand),
        Box::new(CdCommand),
        Box::new(LsCommand),
        Box::new(WriteCommand),
        Box::new(ReadCommand),
        Box::new(PwdCommand),
        Box::new(ExitCommand),
    ];
    let rows = commands.iter().map(|c| (c.summary(), c.usage())).collect();
    for cmd in commands {
        registry.register(cmd);
    }
    registry.register(Box::new(HelpCommand::new(rows)));
}

/// Registry holding every namespace command.
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_all(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_registry() {
        let registry = create_registry();
        assert_eq!(
            registry.names(),
            vec!["cd", "exit", "help", "ls", "mkdir", "pwd", "read", "rm", "rmdir", "touch", "write"]
        );
        assert!(registry.contains("write"));
        assert!(registry.get("cat").is_none());
        assert_eq!(registry.get("rm").map(|c| c.usage()), Some("rm <file-name> / <dir-name>"));
    }
}
