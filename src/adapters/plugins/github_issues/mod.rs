//! GitHub Issues native adapter.
//!
//! Ingests every issue of a repository, the comments on each issue, and the
//! lifecycle events derived from them. Only reads; nothing is written back
//! to GitHub.

pub mod client;
pub mod ingestion;
pub mod models;

pub use client::GitHubClient;
pub use ingestion::{load_github_project_issues, GitHubIssueSource};
