use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// One shell command. `aliases` resolve to the same handler.
pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            aliases: &[],
            description,
            usage,
            handler,
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn answers_to(&self, input: &str) -> bool {
        self.name == input || self.aliases.iter().any(|alias| *alias == input)
    }
}

/// Fixed, ordered command table of the shell.
#[derive(Clone, Copy)]
pub struct CommandRegistry {
    entries: &'static [CommandEntry],
}

impl CommandRegistry {
    pub const fn new(entries: &'static [CommandEntry]) -> Self {
        Self { entries }
    }

    pub fn get(&self, input: &str) -> Option<&'static CommandEntry> {
        self.entries.iter().find(|entry| entry.answers_to(input))
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &'static [CommandEntry] {
        self.entries
    }

    /// Every name the shell accepts, aliases included.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries
            .iter()
            .flat_map(|entry| std::iter::once(entry.name).chain(entry.aliases.iter().copied()))
    }
}
