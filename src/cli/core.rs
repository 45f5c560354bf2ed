use std::{cell::Cell, io};

use chrono::NaiveDate;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    clock::{Clock, SystemClock},
    config::Config,
    console::Console,
    errors::LedgerError,
    ledger::AccountService,
};

use super::{commands, output, registry::CommandRegistry, shell::parse_command_line};

const SUGGESTION_MAX_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("unknown command `{name}`")]
    UnknownCommand {
        name: String,
        suggestion: Option<&'static str>,
    },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("exit requested")]
    ExitRequested,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Clock of the shell: the system date unless a date has been pinned.
#[derive(Debug, Default)]
pub struct ShellClock {
    pinned: Cell<Option<NaiveDate>>,
    system: SystemClock,
}

impl ShellClock {
    pub fn pin(&self, date: NaiveDate) {
        self.pinned.set(Some(date));
    }

    pub fn unpin(&self) {
        self.pinned.set(None);
    }

    pub fn pinned(&self) -> Option<NaiveDate> {
        self.pinned.get()
    }
}

impl Clock for ShellClock {
    fn today(&self) -> NaiveDate {
        self.pinned.get().unwrap_or_else(|| self.system.today())
    }
}

pub type ShellLedger = AccountService<Box<dyn Console>, ShellClock>;

/// State of one shell session: a single ledger alive for the whole session.
pub struct ShellContext {
    pub(crate) running: bool,
    pub(crate) registry: CommandRegistry,
    pub(crate) config: Config,
    pub(crate) ledger: ShellLedger,
}

impl ShellContext {
    pub fn new(config: Config, console: Box<dyn Console>) -> Self {
        Self {
            running: true,
            registry: commands::registry(),
            config,
            ledger: AccountService::new(console, ShellClock::default()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ledger(&self) -> &ShellLedger {
        &self.ledger
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        match self.ledger.clock().pinned() {
            Some(date) => format!("ledger [{}]> ", date.format(&self.config.date_input_format)),
            None => "ledger> ".to_string(),
        }
    }

    /// Sends ledger data to the session console.
    pub(crate) fn print(&self, text: &str) {
        self.ledger.console().print(text);
    }

    /// Tokenizes and runs one input line.
    pub fn execute_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(&err.message);
                return Ok(LoopControl::Continue);
            }
        };

        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();

        match self.dispatch(&command, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|entry| entry.handler) else {
            return Err(CommandError::UnknownCommand {
                name: command.to_string(),
                suggestion: self.suggest(command),
            });
        };
        tracing::debug!(command, ?args, "dispatching command");
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    /// Closest registered command within a small edit distance.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        suggestions
            .first()
            .filter(|(distance, _)| *distance <= SUGGESTION_MAX_DISTANCE)
            .map(|(_, name)| *name)
    }

    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::UnknownCommand { name, suggestion } => {
                output::error(format!("unknown command `{}`", name));
                match suggestion {
                    Some(best) => output::hint(format!("did you mean `{}`?", best)),
                    None => output::hint("use `help` to list commands."),
                }
            }
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }

    pub(crate) fn parse_amount(&self, raw: &str) -> Result<f64, CommandError> {
        let amount: f64 = raw
            .trim()
            .parse()
            .map_err(|_| LedgerError::InvalidAmount(format!("`{}` is not a number", raw)))?;
        if !amount.is_finite() {
            return Err(LedgerError::InvalidAmount(format!("`{}` is not a finite number", raw)).into());
        }
        if amount < 0.0 {
            return Err(LedgerError::InvalidAmount(format!("`{}` is negative", raw)).into());
        }
        Ok(amount)
    }

    pub(crate) fn parse_date(&self, raw: &str) -> Result<NaiveDate, CommandError> {
        let format = &self.config.date_input_format;
        NaiveDate::parse_from_str(raw.trim(), format).map_err(|_| {
            CommandError::from(LedgerError::InvalidDate {
                input: raw.to_string(),
                format: format.clone(),
            })
        })
    }
}
