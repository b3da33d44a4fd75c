use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::tui::ThemeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database file. Relative paths are taken from `~/.taskmenu/`.
    /// Default: `~/.taskmenu/tasks.db`
    #[serde(default)]
    pub db_path: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set. Default: "info"
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// How long a flow's closing message stays up, in milliseconds. Default: 2000
    #[serde(default = "default_notice_ms")]
    pub notice_ms: u64,

    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: None,
            log_level: default_log_level(),
            notice_ms: default_notice_ms(),
            theme: ThemeConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_notice_ms() -> u64 {
    2000
}

impl Config {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    /// The database file to open: the configured path, or the default one.
    pub fn db_path(&self) -> Result<PathBuf> {
        let base = base_dir()?;
        Ok(match &self.db_path {
            Some(path) => resolve(path, &base),
            None => base.join("tasks.db"),
        })
    }
}

/// Expand a leading `~/` and anchor relative paths at `base`.
fn resolve(path: &Path, base: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Returns the base taskmenu directory: ~/.taskmenu/
pub fn base_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".taskmenu"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("config.toml"))
}

pub fn log_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("taskmenu.log"))
}

pub fn ensure_dirs() -> Result<()> {
    let base = base_dir()?;
    fs::create_dir_all(&base).context("failed to create ~/.taskmenu/")?;
    Ok(())
}

/// Load ~/.taskmenu/config.toml, or defaults if it doesn't exist.
pub fn load() -> Result<Config> {
    let path = config_path()?;
    if path.exists() {
        load_from(&path)
    } else {
        Ok(Config::default())
    }
}

/// Load an explicitly named config file, which must exist.
pub fn load_from(path: &Path) -> Result<Config> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}
