//! Feedback messages for the shell.
//!
//! Ledger data (statements, balances, history) goes through the injected
//! [`Console`](crate::console::Console) on stdout; everything here goes to
//! stderr so piped output only carries data.

use colored::Colorize;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
    Hint,
}

fn label(kind: MessageKind) -> colored::ColoredString {
    match kind {
        MessageKind::Info => "[i]".cyan(),
        MessageKind::Warning => "[!]".yellow().bold(),
        MessageKind::Error => "[x]".red().bold(),
        MessageKind::Hint => "hint:".dimmed(),
    }
}

pub fn format_message(kind: MessageKind, message: impl fmt::Display) -> String {
    format!("{} {}", label(kind), message)
}

fn emit(kind: MessageKind, message: impl fmt::Display) {
    eprintln!("{}", format_message(kind, message));
}

pub fn info(message: impl fmt::Display) {
    emit(MessageKind::Info, message);
}

pub fn warning(message: impl fmt::Display) {
    emit(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    emit(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    emit(MessageKind::Hint, message);
}
