use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;

pub const CONFIG_ENV_VAR: &str = "ACCOUNT_LEDGER_CONFIG";
pub const DEFAULT_DATE_INPUT_FORMAT: &str = "%d/%m/%Y";
pub const DEFAULT_LOG_FILTER: &str = "account_ledger=info";

const CONFIG_DIR_NAME: &str = "account_ledger";
const CONFIG_FILE_NAME: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// chrono pattern used to parse dates typed into the shell.
    #[serde(default = "Config::default_date_input_format")]
    pub date_input_format: String,
    /// tracing filter directives; `RUST_LOG` still takes precedence.
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_input_format: Self::default_date_input_format(),
            log_filter: Self::default_log_filter(),
        }
    }
}

impl Config {
    fn default_date_input_format() -> String {
        DEFAULT_DATE_INPUT_FORMAT.into()
    }

    fn default_log_filter() -> String {
        DEFAULT_LOG_FILTER.into()
    }

    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.date_input_format.trim().is_empty() {
            return Err(LedgerError::Config("date_input_format is empty".into()));
        }
        if StrftimeItems::new(&self.date_input_format).any(|item| matches!(item, Item::Error)) {
            return Err(LedgerError::Config(format!(
                "date_input_format `{}` is not a valid date pattern",
                self.date_input_format
            )));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Resolves the config file from `$ACCOUNT_LEDGER_CONFIG`, falling back to
    /// the platform config directory.
    pub fn new() -> Result<Self, LedgerError> {
        if let Some(path) = env::var_os(CONFIG_ENV_VAR) {
            return Ok(Self::with_path(PathBuf::from(path)));
        }
        let base = dirs::config_dir().ok_or_else(|| {
            LedgerError::Config("unable to determine the user config directory".into())
        })?;
        Ok(Self::with_path(
            base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
        ))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the configuration, returning defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, LedgerError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
