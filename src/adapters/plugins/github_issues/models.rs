//! GitHub Issues API response models.
//!
//! These structs map to the GitHub REST API v3 JSON payloads. They are used
//! internally by the GitHub adapter and are not part of the public domain
//! model. Fields the API may send as `null` are `Option` so that a missing
//! value becomes a descriptive error during mapping instead of a panic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issue returned by the GitHub API.
///
/// Issues and pull requests share the same endpoint. Pull requests include a
/// non-null `pull_request` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubIssue {
    /// Unique numeric identifier for the issue.
    pub id: u64,
    /// Sequential number within the repository, used to address comments.
    pub number: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<GitHubLabel>,
    #[serde(default)]
    pub assignee: Option<GitHubUser>,
    #[serde(default)]
    pub pull_request: Option<GitHubPullRequestRef>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

/// A label applied to a GitHub issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubLabel {
    #[serde(default)]
    pub name: Option<String>,
}

/// A GitHub account as embedded in issues and comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    #[serde(default)]
    pub login: Option<String>,
}

/// Reference object present on pull requests (absent on plain issues).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubPullRequestRef {
    #[serde(default)]
    pub url: Option<String>,
}

/// A comment on a GitHub issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubIssueComment {
    pub id: u64,
    #[serde(default)]
    pub user: Option<GitHubUser>,
    #[serde(default)]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
}
