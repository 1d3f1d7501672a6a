//! Shell context, dispatch, and error reporting.

use std::io;

use dialoguer::Confirm;

use crate::{
    config::{Config, ConfigManager},
    errors::{ConfigError, ExportError, LedgerError},
    session::BudgetSession,
};

use super::commands;
use super::output::{self, OutputPreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// State of one running shell: the budgeting session it edits plus the
/// configuration it was started with.
pub struct ShellContext {
    pub mode: CliMode,
    pub session: BudgetSession,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        Self::with_config_manager(mode, config_manager)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::set_preferences(OutputPreferences {
            plain: mode == CliMode::Script,
        });
        if mode == CliMode::Script {
            colored::control::set_override(false);
        }
        tracing::debug!(config = %config_manager.path().display(), ?mode, "shell context ready");

        Ok(Self {
            mode,
            session: BudgetSession::new(),
            config,
            config_manager,
            last_command: None,
            running: true,
        })
    }

    /// `budget [3 | 1040 €]> `: entry count and running total.
    pub fn prompt(&self) -> String {
        let ledger = self.session.ledger();
        format!(
            "budget [{} | {}]> ",
            ledger.len(),
            self.format_amount(ledger.total())
        )
    }

    /// Naive amount rendering: the number followed by the currency symbol.
    pub(crate) fn format_amount(&self, amount: f64) -> String {
        format!("{} {}", amount, self.config.currency_symbol)
    }

    /// Tokenizes one input line (shell quoting, so `add "Eating out" 40`
    /// works) and runs the matching command.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match shell_words::split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(format!("Could not read that line: {}", err));
                return Ok(LoopControl::Continue);
            }
        };
        let Some((name, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        let Some(command) = commands::find(name) else {
            self.suggest_command(name);
            return Ok(LoopControl::Continue);
        };
        match (command.run)(self, &args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(name) = commands::closest(input) {
            output::hint(format!("Did you mean `{}`?", name));
        }
    }

    /// Ctrl-C in the interactive shell; the ledger lives only in memory.
    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script || self.session.ledger().is_empty() {
            return Ok(true);
        }
        let confirmed = Confirm::new()
            .with_prompt("Exit shell? Unexported expenses will be lost.")
            .default(false)
            .interact()
            .map_err(CommandError::from)?;
        Ok(confirmed)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::Ledger(err) => {
                tracing::debug!(error = %err, "input rejected");
                output::error(err.user_message());
                Ok(())
            }
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                tracing::warn!(error = %other, "command failed");
                output::error(other);
                Ok(())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Errors that abort the shell itself.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> Result<ShellContext, CliError> {
    let dir = tempfile::TempDir::new()?;
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf())?;
    let mut app = ShellContext::with_config_manager(CliMode::Script, manager)?;
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}
