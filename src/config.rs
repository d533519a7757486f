use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OnboardlyConfig {
    /// JSON document backing the HTTP API
    pub data_file: Option<String>,
    /// SQLite database backing the console
    pub database: Option<String>,
    pub port: Option<u16>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("onboardly.toml")
}

pub fn default_data_path() -> PathBuf {
    PathBuf::from("data.json")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("onboarding.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<OnboardlyConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: OnboardlyConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
