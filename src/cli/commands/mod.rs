//! Shell commands. The table below is the single source for dispatch, `help`
//! output, tab completion, and typo suggestions.

pub mod budget;
pub mod export;
pub mod system;

use strsim::levenshtein;

use crate::cli::core::{CommandResult, ShellContext};

/// Largest edit distance still offered as a "did you mean" suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    pub run: fn(&mut ShellContext, &[&str]) -> CommandResult,
}

pub static COMMANDS: &[Command] = &[
    Command {
        name: "income",
        usage: "income [<amount>|clear]",
        summary: "Show, set, or clear the monthly income",
        run: budget::income,
    },
    Command {
        name: "add",
        usage: "add <name> <amount>",
        summary: "Add an expense (the last argument is the amount)",
        run: budget::add,
    },
    Command {
        name: "remove",
        usage: "remove <n>",
        summary: "Remove the expense at the listed position",
        run: budget::remove,
    },
    Command {
        name: "list",
        usage: "list",
        summary: "Show expenses and their shares",
        run: budget::list,
    },
    Command {
        name: "summary",
        usage: "summary",
        summary: "Show total, income, and remaining balance",
        run: budget::summary,
    },
    Command {
        name: "export",
        usage: "export [path|-]",
        summary: "Write expenses to a CSV spreadsheet (`-` prints to stdout)",
        run: export::export,
    },
    Command {
        name: "help",
        usage: "help [command]",
        summary: "Show available commands",
        run: system::help,
    },
    Command {
        name: "exit",
        usage: "exit",
        summary: "Leave the shell (unexported expenses are lost)",
        run: system::exit,
    },
];

pub fn find(name: &str) -> Option<&'static Command> {
    COMMANDS
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

/// Nearest command name to a mistyped word, if any is close enough.
pub fn closest(input: &str) -> Option<&'static str> {
    let needle = input.to_lowercase();
    COMMANDS
        .iter()
        .map(|command| (levenshtein(command.name, &needle), command.name))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}
