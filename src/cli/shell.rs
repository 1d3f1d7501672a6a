use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use colored::Colorize;
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::{Hint, Hinter},
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};

use crate::cli::commands::{find, COMMANDS};
use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output;

/// When set, commands are read line by line from stdin without prompts.
pub const SCRIPT_ENV: &str = "BUDGET_PLANNER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<BudgetHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(BudgetHelper));

    output::info("Budget Planner. Type `help` to list commands.");

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if run_line(context, trimmed)? == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        if run_line(context, &line?)? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

fn run_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    match context.process_line(line) {
        Ok(control) => Ok(control),
        Err(err) => {
            context.report_error(err)?;
            Ok(LoopControl::Continue)
        }
    }
}

/// Tab-completes command names (also after `help`) and shows the
/// argument usage once a command word is typed.
struct BudgetHelper;

impl BudgetHelper {
    fn candidates(needle: &str) -> Vec<Pair> {
        let needle = needle.to_ascii_lowercase();
        COMMANDS
            .iter()
            .filter(|command| command.name.starts_with(&needle))
            .map(|command| Pair {
                display: command.name.to_string(),
                replacement: command.name.to_string(),
            })
            .collect()
    }
}

impl Helper for BudgetHelper {}

impl Completer for BudgetHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_words(&line[..pos]))
    }
}

fn complete_words(prefix: &str) -> (usize, Vec<Pair>) {
    let start = prefix.rfind(char::is_whitespace).map_or(0, |idx| idx + 1);
    let earlier: Vec<&str> = prefix[..start].split_whitespace().collect();
    let candidates = match earlier.as_slice() {
        [] => BudgetHelper::candidates(&prefix[start..]),
        [first] if first.eq_ignore_ascii_case("help") => {
            BudgetHelper::candidates(&prefix[start..])
        }
        _ => Vec::new(),
    };
    (start, candidates)
}

struct UsageHint(String);

impl Hint for UsageHint {
    fn display(&self) -> &str {
        &self.0
    }

    // Placeholders like `<amount>` must not be inserted into the line.
    fn completion(&self) -> Option<&str> {
        None
    }
}

impl Hinter for BudgetHelper {
    type Hint = UsageHint;

    fn hint(&self, line: &str, pos: usize, _ctx: &ReadlineContext<'_>) -> Option<UsageHint> {
        if pos < line.len() {
            return None;
        }
        usage_tail(line).map(UsageHint)
    }
}

/// Argument part of a command's usage, shown while only its name is typed.
fn usage_tail(line: &str) -> Option<String> {
    let word = line.trim_start();
    if word.is_empty() || word.trim_end().contains(char::is_whitespace) {
        return None;
    }
    let command = find(word.trim_end())?;
    let tail = command.usage.strip_prefix(command.name)?.trim_start();
    if tail.is_empty() {
        return None;
    }
    let gap = if word.ends_with(char::is_whitespace) { "" } else { " " };
    Some(format!("{}{}", gap, tail))
}

impl Highlighter for BudgetHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }
}

impl Validator for BudgetHelper {}
