use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::ConfigError,
    export::ExportLabels,
    utils::paths::{app_data_dir, config_file_in, exports_dir_in, staging_path},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Appended to amounts in the shell, e.g. `800 €`.
    pub currency_symbol: String,
    pub export: ExportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "€".into(),
            export: ExportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub file_name: String,
    pub labels: ExportLabels,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "Monthly_Budget.csv".into(),
            labels: ExportLabels::default(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
    exports_dir: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            exports_dir: exports_dir_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "loaded configuration");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = staging_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where `export` writes when no explicit path is given.
    pub fn default_export_path(&self, config: &Config) -> PathBuf {
        self.exports_dir.join(&config.export.file_name)
    }
}

fn write_all(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        assert_eq!(manager.load().expect("load"), Config::default());
    }

    #[test]
    fn default_export_path_lives_under_exports() {
        let dir = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        let path = manager.default_export_path(&Config::default());
        assert_eq!(path, dir.path().join("exports").join("Monthly_Budget.csv"));
    }
}
