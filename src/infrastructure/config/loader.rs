use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::adapters::plugins::github_issues::client::MAX_PAGE_SIZE;
use crate::domain::models::config::Config;
use crate::infrastructure::logging::parse_log_level;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("GitHub token is empty. Set github_token or PIE_GITHUB_TOKEN")]
    EmptyGitHubToken,

    #[error("github_repos[{index}] has an empty {field}")]
    EmptyRepoField { index: usize, field: &'static str },

    #[error("Invalid page_size: {0}. Must be between 1 and {MAX_PAGE_SIZE}")]
    InvalidPageSize(u32),

    #[error("GitHub api_url cannot be empty")]
    EmptyApiUrl,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. The TOML file at `path`
    /// 3. Environment variables (PIE_* prefix, `__` separates nested keys)
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let config: Config = Self::figment(path)
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("PIE_").split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.github_token.trim().is_empty() {
            return Err(ConfigError::EmptyGitHubToken);
        }

        for (index, repo) in config.github_repos.iter().enumerate() {
            if repo.owner.trim().is_empty() {
                return Err(ConfigError::EmptyRepoField {
                    index,
                    field: "owner",
                });
            }
            if repo.name.trim().is_empty() {
                return Err(ConfigError::EmptyRepoField {
                    index,
                    field: "name",
                });
            }
        }

        if config.github.page_size == 0 || config.github.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize(config.github.page_size));
        }

        if config.github.api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }

        if parse_log_level(&config.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
