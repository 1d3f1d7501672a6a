use std::path::PathBuf;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::export::{rows_to_csv, save_rows};

pub(super) fn export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let rows = context.session.export_rows(&context.config.export.labels);
    match args {
        ["-"] => {
            print!("{}", rows_to_csv(&rows)?);
            Ok(())
        }
        [] | [_] => {
            let path = args
                .first()
                .map(PathBuf::from)
                .unwrap_or_else(|| context.config_manager.default_export_path(&context.config));
            save_rows(&path, &rows)?;
            output::success(format!(
                "Exported {} expense(s) to {}.",
                context.session.ledger().len(),
                path.display()
            ));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: export [path|-]".into(),
        )),
    }
}
