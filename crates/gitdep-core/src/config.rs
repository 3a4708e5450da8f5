use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use gitdep_util::errors::GitDepError;

/// Environment variable that overrides the gitdep data directory.
pub const HOME_ENV: &str = "GITDEPEND_HOME";

/// Global user configuration loaded from `<data dir>/GitDepend/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Artifact cache settings from `[cache]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Overrides the default `<data dir>/GitDepend/cache`. A leading `~/` expands to the home directory.
    #[serde(default)]
    pub dir: Option<String>,
}

/// External executables from `[tools]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_git")]
    pub git: String,
    #[serde(default = "default_nuget")]
    pub nuget: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            git: default_git(),
            nuget: default_nuget(),
        }
    }
}

fn default_git() -> String {
    "git".to_string()
}

fn default_nuget() -> String {
    "nuget".to_string()
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the configuration at `path`, or return defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| GitDepError::Generic {
            message: format!("Failed to read global config: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| {
            GitDepError::Generic {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// The artifact cache directory this configuration selects.
    pub fn cache_dir(&self) -> PathBuf {
        match self.cache.dir.as_deref() {
            Some(dir) => expand_home(dir),
            None => dirs_path().join("cache"),
        }
    }
}

/// Returns the gitdep data directory: `$GITDEPEND_HOME` if set, otherwise
/// `GitDepend` under the per-user application data root.
pub fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(home);
    }
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("GitDepend")
}

fn expand_home(dir: &str) -> PathBuf {
    match (dir.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(dir),
    }
}
