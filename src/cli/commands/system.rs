use super::{find, COMMANDS};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;

pub(super) fn help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(name) = args.first() else {
        output::section("Commands");
        let width = COMMANDS.iter().map(|command| command.usage.len()).max().unwrap_or(0);
        for command in COMMANDS {
            output::info(format!("  {:<width$}  {}", command.usage, command.summary));
        }
        output::info(format!(
            "Amounts are shown with `{}`; exports go to {} by default.",
            context.config.currency_symbol, context.config.export.file_name
        ));
        return Ok(());
    };

    match find(name) {
        Some(command) => {
            output::section(command.name);
            output::info(command.summary);
            output::info(format!("Usage: {}", command.usage));
        }
        None => context.suggest_command(name),
    }
    Ok(())
}

pub(super) fn exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
