use crate::core::dirs::get_config_directory;
use crate::core::error::PlaygroundError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What to do when a command is missing a required argument (`git add`, `git remote add`)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingArgumentPolicy {
    /// Fail with a git-style usage message
    #[default]
    Strict,
    /// Print nothing and leave the state alone
    Silent,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CommitIdStrategy {
    #[default]
    Random,
    Sequential,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub missing_arguments: MissingArgumentPolicy,
    pub commit_ids: CommitIdStrategy,
    /// Pause before printing a response in the interactive terminal
    pub response_delay_ms: u64,
    pub color: bool,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            missing_arguments: MissingArgumentPolicy::default(),
            commit_ids: CommitIdStrategy::default(),
            response_delay_ms: 0,
            color: true,
        }
    }
}

impl PlaygroundConfig {
    pub fn default_path() -> Result<PathBuf, PlaygroundError> {
        Ok(get_config_directory()?.join("config.json"))
    }

    pub fn load_or_create() -> Result<Self, PlaygroundError> {
        let config_file = Self::default_path()?;

        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            log::debug!("No config at {}, writing defaults", config_file.display());
            let config = Self::default();
            config.save_to(&config_file)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, PlaygroundError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlaygroundError::config_read_failed(path, e))?;
        let config = serde_json::from_str(&content)
            .map_err(|e| PlaygroundError::config_parse_failed(path, e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), PlaygroundError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PlaygroundError::write_failed(parent, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| PlaygroundError::write_failed(path, e))?;

        Ok(())
    }
}
