//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the workspace config, relative to the working directory
pub const WORKSPACE_DIR: &str = ".wsm";

const DEFAULT_RECENT_LIMIT: usize = 5;
const DEFAULT_LABEL_NAME_WORDS: usize = 2;

/// WSM configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixture directory to use instead of the built-in set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixtures: Option<PathBuf>,

    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Projects listed under "recent" on the status dashboard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_limit: Option<usize>,

    /// Words of the project name printed on a cage label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_name_words: Option<usize>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        Self::layered(
            Self::global_config_path().as_deref(),
            Some(Self::workspace_config_path().as_path()),
            |key| std::env::var(key).ok(),
        )
    }

    /// Merge defaults, the two config files (when present) and the environment
    pub fn layered(
        global: Option<&Path>,
        workspace: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (applied by the accessors)

        // 2. Global user config (~/.config/wsm/config.yaml)
        if let Some(global) = global.and_then(Self::read_file) {
            config.merge(global);
        }

        // 3. Workspace config (.wsm/config.yaml)
        if let Some(local) = workspace.and_then(Self::read_file) {
            config.merge(local);
        }

        // 4. Environment variables
        if let Some(fixtures) = env("WSM_FIXTURES") {
            config.fixtures = Some(PathBuf::from(fixtures));
        }
        if let Some(format) = env("WSM_FORMAT") {
            config.default_format = Some(format);
        }

        config
    }

    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config");
                return None;
            }
        };
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                None
            }
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "wsm")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    pub fn workspace_config_path() -> PathBuf {
        Path::new(WORKSPACE_DIR).join("config.yaml")
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.fixtures.is_some() {
            self.fixtures = other.fixtures;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.recent_limit.is_some() {
            self.recent_limit = other.recent_limit;
        }
        if other.label_name_words.is_some() {
            self.label_name_words = other.label_name_words;
        }
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit.unwrap_or(DEFAULT_RECENT_LIMIT)
    }

    pub fn label_name_words(&self) -> usize {
        self.label_name_words.unwrap_or(DEFAULT_LABEL_NAME_WORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = Config::layered(None, None, no_env);
        assert_eq!(config, Config::default());
        assert_eq!(config.recent_limit(), 5);
        assert_eq!(config.label_name_words(), 2);
    }

    #[test]
    fn test_workspace_overrides_global() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.yaml");
        let local = dir.path().join("local.yaml");
        fs::write(&global, "recent_limit: 3\nlabel_name_words: 4\n").unwrap();
        fs::write(&local, "recent_limit: 7\n").unwrap();

        let config = Config::layered(Some(&global), Some(&local), no_env);
        assert_eq!(config.recent_limit(), 7);
        assert_eq!(config.label_name_words(), 4);
    }

    #[test]
    fn test_env_overrides_files() {
        let dir = tempdir().unwrap();
        let local = dir.path().join("config.yaml");
        fs::write(&local, "fixtures: /srv/a\ndefault_format: yaml\n").unwrap();

        let config = Config::layered(None, Some(&local), |key| match key {
            "WSM_FIXTURES" => Some("/srv/b".to_string()),
            _ => None,
        });
        assert_eq!(config.fixtures, Some(PathBuf::from("/srv/b")));
        assert_eq!(config.default_format.as_deref(), Some("yaml"));
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let dir = tempdir().unwrap();
        let local = dir.path().join("config.yaml");
        fs::write(&local, "recent_limit: [oops\n").unwrap();

        let config = Config::layered(None, Some(&local), no_env);
        assert_eq!(config, Config::default());
    }
}
