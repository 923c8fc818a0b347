//! Domain models for pie.

pub mod config;
pub mod issue;

pub use config::{Config, GitHubConfig, GitHubRepoConfig};
pub use issue::{Issue, IssueComment, IssueEvent, IssueEventType, Project, SourceSystem};
