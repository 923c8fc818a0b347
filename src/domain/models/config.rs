use std::fmt;

use serde::{Deserialize, Serialize};

use crate::infrastructure::logging::LogConfig;

/// Main configuration structure for pie
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// GitHub access token, sent as a bearer credential
    #[serde(default)]
    pub github_token: String,

    /// Repositories to load, in order
    #[serde(default)]
    pub github_repos: Vec<GitHubRepoConfig>,

    /// GitHub API settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: String::new(),
            github_repos: vec![],
            github: GitHubConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.github_token.is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        f.debug_struct("Config")
            .field("github_token", &token)
            .field("github_repos", &self.github_repos)
            .field("github", &self.github)
            .field("logging", &self.logging)
            .finish()
    }
}

/// One configured repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepoConfig {
    /// Organisation or user owning the repository
    #[serde(default)]
    pub owner: String,

    /// Repository name
    #[serde(default)]
    pub name: String,
}

impl GitHubRepoConfig {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

/// GitHub API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GitHubConfig {
    /// Base URL of the REST API (override for GitHub Enterprise)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Items requested per page (1-100)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Drop pull requests returned by the issues endpoint
    #[serde(default)]
    pub skip_pull_requests: bool,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_page_size() -> u32 {
    100
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            page_size: default_page_size(),
            skip_pull_requests: false,
        }
    }
}
