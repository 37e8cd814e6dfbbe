use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::LedgerError,
    storage::JsonSnapshotStore,
    utils::{
        paths::app_data_dir,
        persistence::{ensure_dir, write_atomic},
    },
};

const CONFIG_FILE: &str = "config.json";
const DEFAULT_SNAPSHOT_FILE: &str = "budget_data.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "AppConfig::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "AppConfig::default_snapshot_file")]
    pub snapshot_file: String,
    /// Tracing filter directives, e.g. `budget_allocator=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl AppConfig {
    fn default_currency_symbol() -> String {
        "$".into()
    }

    fn default_snapshot_file() -> String {
        DEFAULT_SNAPSHOT_FILE.into()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            snapshot_file: Self::default_snapshot_file(),
            log_filter: None,
        }
    }
}

/// Loads and saves [`AppConfig`] under the application data directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
            base,
        })
    }

    /// Returns defaults when no config file exists yet.
    pub fn load(&self) -> Result<AppConfig, LedgerError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&data).map_err(|err| {
            LedgerError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &AppConfig) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot_path(&self, config: &AppConfig) -> PathBuf {
        self.base.join(&config.snapshot_file)
    }

    pub fn snapshot_store(&self, config: &AppConfig) -> JsonSnapshotStore {
        JsonSnapshotStore::new(self.snapshot_path(config))
    }
}
