use crate::statement::format_amount;

use super::core::{CommandError, CommandResult, ShellContext};
use super::registry::{CommandEntry, CommandRegistry};

static COMMANDS: &[CommandEntry] = &[
    CommandEntry::new(
        "deposit",
        "Add money to the account",
        "deposit <amount>",
        cmd_deposit,
    ),
    CommandEntry::new(
        "withdraw",
        "Take money out (ignored when it would overdraw the account)",
        "withdraw <amount>",
        cmd_withdraw,
    ),
    CommandEntry::new(
        "statement",
        "Print the statement, most recent first",
        "statement",
        cmd_statement,
    ),
    CommandEntry::new("balance", "Print the current balance", "balance", cmd_balance),
    CommandEntry::new(
        "history",
        "Print recorded transactions as JSON, in recording order",
        "history",
        cmd_history,
    ),
    CommandEntry::new(
        "date",
        "Pin the date used for new transactions, or go back to today",
        "date <DD/MM/YYYY|today>",
        cmd_date,
    ),
    CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
    CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit).with_aliases(&["quit"]),
];

pub(crate) fn registry() -> CommandRegistry {
    CommandRegistry::new(COMMANDS)
}

fn single_arg<'a>(args: &[&'a str], usage: &str) -> Result<&'a str, CommandError> {
    match args {
        [value] => Ok(*value),
        _ => Err(CommandError::InvalidArguments(format!("usage: {}", usage))),
    }
}

fn no_args(args: &[&str], usage: &str) -> CommandResult {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!("usage: {}", usage)))
    }
}

fn cmd_deposit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = single_arg(args, "deposit <amount>")?;
    let amount = context.parse_amount(raw)?;
    context.ledger.deposit(amount);
    Ok(())
}

fn cmd_withdraw(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = single_arg(args, "withdraw <amount>")?;
    let amount = context.parse_amount(raw)?;
    context.ledger.withdraw(amount);
    Ok(())
}

fn cmd_statement(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_args(args, "statement")?;
    context.ledger.print_statement();
    Ok(())
}

fn cmd_balance(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_args(args, "balance")?;
    context.print(&format_amount(context.ledger.balance()));
    Ok(())
}

fn cmd_history(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_args(args, "history")?;
    let json = serde_json::to_string_pretty(context.ledger.transactions())?;
    context.print(&json);
    Ok(())
}

fn cmd_date(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = single_arg(args, "date <DD/MM/YYYY|today>")?;
    if raw.eq_ignore_ascii_case("today") {
        context.ledger.clock().unpin();
        tracing::info!("transaction date follows the system clock");
        return Ok(());
    }
    let date = context.parse_date(raw)?;
    context.ledger.clock().pin(date);
    tracing::info!(%date, "transaction date pinned");
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let text = match args {
        [] => {
            let entries = context.registry.entries();
            let width = entries.iter().map(|entry| entry.name.len()).max().unwrap_or(0);
            entries
                .iter()
                .map(|entry| format!("{:width$}  {}", entry.name, entry.description))
                .collect::<Vec<_>>()
                .join("\n")
        }
        [name] => {
            let key = name.to_lowercase();
            let entry = context.registry.get(&key).ok_or_else(|| {
                CommandError::InvalidArguments(format!("no help for unknown command `{}`", name))
            })?;
            let mut text = format!("{}\nusage: {}", entry.description, entry.usage);
            if !entry.aliases.is_empty() {
                text.push_str(&format!("\naliases: {}", entry.aliases.join(", ")));
            }
            text
        }
        _ => return Err(CommandError::InvalidArguments("usage: help [command]".into())),
    };
    context.print(&text);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_args(args, "exit")?;
    Err(CommandError::ExitRequested)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use chrono::NaiveDate;

    use crate::cli::core::LoopControl;
    use crate::config::Config;
    use crate::console::BufferConsole;

    use super::*;

    fn context() -> (ShellContext, Rc<BufferConsole>) {
        let console = Rc::new(BufferConsole::new());
        let context = ShellContext::new(
            Config::default(),
            Box::new(Rc::clone(&console)),
        );
        (context, console)
    }

    fn run(context: &mut ShellContext, lines: &[&str]) {
        for line in lines {
            context.execute_line(line).expect("command succeeds");
        }
    }

    #[test]
    fn acceptance_session_prints_statement() {
        let (mut context, console) = context();
        run(
            &mut context,
            &[
                "date 10/01/2012",
                "deposit 1000",
                "date 13/01/2012",
                "deposit 2000",
                "date 14/01/2012",
                "withdraw 500",
                "statement",
            ],
        );

        assert_eq!(
            console.last().unwrap(),
            "Date || Amount || Balance\n\
             14/01/2012 || -500 || 2500\n\
             13/01/2012 || 2000 || 3000\n\
             10/01/2012 || 1000 || 1000"
        );
    }

    #[test]
    fn overdraft_is_silent() {
        let (mut context, console) = context();
        run(&mut context, &["withdraw 100", "balance"]);
        assert_eq!(console.printed(), vec!["0"]);
        assert!(context.ledger().transactions().is_empty());
    }

    #[test]
    fn history_is_json_in_recording_order() {
        let (mut context, console) = context();
        run(
            &mut context,
            &["date 02/01/2020", "deposit 5", "date 01/01/2020", "deposit 7", "history"],
        );
        let value: serde_json::Value = serde_json::from_str(&console.last().unwrap()).unwrap();
        assert_eq!(value[0]["date"], "2020-01-02");
        assert_eq!(value[1]["balance"], 12.0);
    }

    #[test]
    fn date_today_unpins_the_clock() {
        let (mut context, _) = context();
        run(&mut context, &["date 10/01/2012"]);
        assert_eq!(
            context.ledger().clock().pinned(),
            NaiveDate::from_ymd_opt(2012, 1, 10)
        );
        run(&mut context, &["date TODAY"]);
        assert_eq!(context.ledger().clock().pinned(), None);
    }

    #[test]
    fn bad_arguments_are_reported() {
        let (mut context, _) = context();
        assert!(matches!(
            context.execute_line("deposit"),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(matches!(
            context.execute_line("deposit lots"),
            Err(CommandError::Ledger(_))
        ));
        assert!(matches!(
            context.execute_line("date 2012-01-10"),
            Err(CommandError::Ledger(_))
        ));
        assert!(context.ledger().transactions().is_empty());
    }

    #[test]
    fn help_lists_and_describes_commands() {
        let (mut context, console) = context();
        run(&mut context, &["help", "help withdraw", "help quit"]);
        let printed = console.printed();
        assert!(printed[0].lines().any(|line| line.starts_with("statement")));
        assert!(!printed[0].lines().any(|line| line.starts_with("quit")));
        assert!(printed[1].ends_with("usage: withdraw <amount>"));
        assert!(printed[2].ends_with("aliases: quit"));
    }

    #[test]
    fn exit_stops_the_session() {
        let (mut context, _) = context();
        assert_eq!(context.execute_line("quit").unwrap(), LoopControl::Exit);
        assert!(!context.is_running());
    }
}
