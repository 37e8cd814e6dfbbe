use dirs::home_dir;
use std::{env, ffi::OsString, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".budget_allocator";
pub const HOME_ENV: &str = "BUDGET_ALLOCATOR_HOME";

/// Returns the application data directory: `$BUDGET_ALLOCATOR_HOME` when set,
/// otherwise `~/.budget_allocator`.
pub fn app_data_dir() -> PathBuf {
    resolve_data_dir(env::var_os(HOME_ENV), home_dir())
}

fn resolve_data_dir(custom: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    match custom {
        Some(custom) => PathBuf::from(custom),
        None => home
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME),
    }
}
