use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".budget_planner";
const CONFIG_FILE: &str = "config.json";
const EXPORTS_DIR: &str = "exports";
const STAGING_SUFFIX: &str = ".tmp";

/// Returns the application data directory, defaulting to `~/.budget_planner`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BUDGET_PLANNER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Default location for exported spreadsheets.
pub fn exports_dir_in(base: &Path) -> PathBuf {
    base.join(EXPORTS_DIR)
}

/// Sibling file used while writing `path`: the full file name plus `.tmp`,
/// so `budget.csv` stages to `budget.csv.tmp`.
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(STAGING_SUFFIX);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_path_appends_to_the_full_name() {
        assert_eq!(
            staging_path(Path::new("/data/config.json")),
            PathBuf::from("/data/config.json.tmp")
        );
        assert_eq!(
            staging_path(Path::new("exports/budget")),
            PathBuf::from("exports/budget.tmp")
        );
    }
}
