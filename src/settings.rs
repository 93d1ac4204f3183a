use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{QuotaTable, DEFAULT_QUOTAS};
use crate::utils::constants::DEFAULT_DATA_DIR;

/// Deployment settings. Everything has a built-in default, so running
/// without a settings file reproduces the stock dashboard behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory scanned for spreadsheet exports
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Per-sector separation quotas; replaces the built-in table entirely
    /// when present
    #[serde(default = "default_quotas")]
    quotas: HashMap<String, f64>,
}

impl Settings {
    /// Load settings from an explicit file, or from an optional
    /// `dashboard.toml` in the working directory when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let builder = match path {
            Some(path) => Config::builder().add_source(File::from(path)),
            None => Config::builder().add_source(File::with_name("dashboard").required(false)),
        };
        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    pub fn quota_table(&self) -> QuotaTable {
        self.quotas.clone().into()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            quotas: default_quotas(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_quotas() -> HashMap<String, f64> {
    DEFAULT_QUOTAS
        .iter()
        .map(|(code, quota)| (code.to_string(), *quota))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.data_dir, PathBuf::from("Dados"));
        assert_eq!(settings.quota_table().get("12"), 112.0);
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "data_dir = \"/srv/exportacoes\"")?;
        writeln!(file, "[quotas]")?;
        writeln!(file, "\"10\" = 100.0")?;

        let settings = Settings::load(Some(file.path()))?;
        assert_eq!(settings.data_dir, PathBuf::from("/srv/exportacoes"));
        assert_eq!(settings.quota_table().get("10"), 100.0);
        // The file's table replaces the built-in one
        assert_eq!(settings.quota_table().get("12"), 0.0);

        Ok(())
    }

    #[test]
    fn test_missing_optional_file_falls_back_to_defaults() -> Result<()> {
        let settings = Settings::load(None)?;
        assert_eq!(settings.quota_table().get("53"), 184.0);
        Ok(())
    }
}
