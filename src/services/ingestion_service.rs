//! Runs an issue source over every configured repository.
//!
//! Repositories are loaded one at a time, in configuration order, into a
//! single shared sink. A failing repository is logged and recorded in the
//! [`IngestionReport`]; the run continues with the next one. Records stored
//! before a failure are kept.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::domain::errors::DomainError;
use crate::domain::models::GitHubRepoConfig;
use crate::domain::ports::{IssueSource, RecordSink};

/// A repository whose load returned an error.
#[derive(Debug)]
pub struct RepositoryFailure {
    pub owner: String,
    pub name: String,
    pub error: DomainError,
}

/// Outcome of one ingestion run.
#[derive(Debug, Default)]
pub struct IngestionReport {
    /// Repositories that loaded completely.
    pub loaded: Vec<GitHubRepoConfig>,
    /// Repositories that failed, in the order they were attempted.
    pub failures: Vec<RepositoryFailure>,
    /// Set when the run stopped early because of cancellation.
    pub cancelled: bool,
}

impl IngestionReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && !self.cancelled
    }
}

/// Drives an [`IssueSource`] across a list of repositories.
pub struct IngestionService {
    source: Arc<dyn IssueSource>,
}

impl IngestionService {
    pub fn new(source: Arc<dyn IssueSource>) -> Self {
        Self { source }
    }

    /// Load every repository into `sink`.
    ///
    /// Never fails as a whole; per-repository errors end up in the report.
    /// Once `cancel` fires, the repository in flight is reported as failed
    /// and the remaining ones are not attempted.
    pub async fn run(
        &self,
        cancel: &CancellationToken,
        sink: &mut dyn RecordSink,
        repos: &[GitHubRepoConfig],
    ) -> IngestionReport {
        let mut report = IngestionReport::default();

        for repo in repos {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            match self
                .source
                .load_project(cancel, sink, &repo.owner, &repo.name)
                .await
            {
                Ok(()) => report.loaded.push(repo.clone()),
                Err(error) => {
                    tracing::error!(
                        source_system = %self.source.source_system(),
                        owner = %repo.owner,
                        name = %repo.name,
                        phase = ?error.failed_phase(),
                        error = %error,
                        "Repository load failed"
                    );
                    report.cancelled = error.is_cancelled();
                    report.failures.push(RepositoryFailure {
                        owner: repo.owner.clone(),
                        name: repo.name.clone(),
                        error,
                    });
                    if report.cancelled {
                        break;
                    }
                }
            }
        }

        tracing::info!(
            loaded = report.loaded.len(),
            failed = report.failures.len(),
            cancelled = report.cancelled,
            "Ingestion run finished"
        );

        report
    }
}
