/// App-level config stored as `config.json` in the Tauri app data dir
///
/// File access is split from path resolution so the read/write/merge logic
/// is testable without a running Tauri app.

use std::fs;
use std::path::{Path, PathBuf};

use tauri::{AppHandle, Manager};
use tracing::debug;

use crate::error::{ForgeError, Result};
use crate::models::GlobalConfig;

/// File name of the global config
pub const GLOBAL_CONFIG_NAME: &str = "config.json";

/// Resolve the global config file path for this app install
pub fn config_path(app_handle: &AppHandle) -> Result<PathBuf> {
    let dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|_| ForgeError::AppDataDirUnavailable)?;
    Ok(dir.join(GLOBAL_CONFIG_NAME))
}

/// Create the config file with defaults when it does not exist yet
pub fn init_at(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!("Creating default global config at {}", path.display());
    write_at(path, &GlobalConfig::default())
}

pub fn read_at(path: &Path) -> Result<GlobalConfig> {
    let contents = fs::read_to_string(path).map_err(|source| ForgeError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn write_at(path: &Path, config: &GlobalConfig) -> Result<()> {
    let contents = serde_json::to_string(config)?;
    fs::write(path, contents).map_err(|source| ForgeError::ConfigWrite {
        path: path.display().to_string(),
        source,
    })
}

/// Initialize the global config on app startup
pub fn init(app_handle: &AppHandle) -> Result<()> {
    init_at(&config_path(app_handle)?)
}

pub fn read(app_handle: &AppHandle) -> Result<GlobalConfig> {
    read_at(&config_path(app_handle)?)
}

pub fn write(app_handle: &AppHandle, config: &GlobalConfig) -> Result<()> {
    write_at(&config_path(app_handle)?, config)
}

/// Record a workspace as most recently used and persist the list
pub fn touch_project(app_handle: &AppHandle, source_path: &str) -> Result<()> {
    let path = config_path(app_handle)?;
    let mut config = read_at(&path)?;
    config.touch_project(source_path);
    write_at(&path, &config)
}

/// Most recently used workspace path
pub fn latest_project(app_handle: &AppHandle) -> Result<String> {
    let config = read(app_handle)?;
    config
        .projects
        .first()
        .cloned()
        .ok_or(ForgeError::NoKnownProject)
}
