//! Native source adapter plugins.
//!
//! Each sub-module corresponds to an external issue tracker and implements
//! the [`IssueSource`] port directly.

pub mod github_issues;

use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Config, SourceSystem};
use crate::domain::ports::IssueSource;

use self::github_issues::GitHubIssueSource;

/// Create the issue source for a source system from the loaded configuration.
///
/// # Errors
///
/// Returns `Err` if the source system has no adapter yet or if its settings
/// are invalid.
pub fn create_issue_source(
    system: SourceSystem,
    config: &Config,
) -> DomainResult<Arc<dyn IssueSource>> {
    match system {
        SourceSystem::GitHub => {
            let source = GitHubIssueSource::from_config(config.github_token.clone(), &config.github)?;
            Ok(Arc::new(source))
        }
        unsupported @ SourceSystem::Jira => Err(DomainError::UnsupportedSource(unsupported)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_source_is_created() {
        let config = Config {
            github_token: "ghp_token".to_string(),
            ..Default::default()
        };

        let source = create_issue_source(SourceSystem::GitHub, &config).unwrap();
        assert_eq!(source.source_system(), SourceSystem::GitHub);
    }

    #[test]
    fn test_jira_is_unsupported() {
        let result = create_issue_source(SourceSystem::Jira, &Config::default());
        match result {
            Err(DomainError::UnsupportedSource(SourceSystem::Jira)) => {}
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("Expected error for Jira"),
        }
    }

    #[test]
    fn test_invalid_github_settings_are_rejected() {
        let mut config = Config::default();
        config.github.page_size = 500;

        assert!(matches!(
            create_issue_source(SourceSystem::GitHub, &config),
            Err(DomainError::ValidationFailed(_))
        ));
    }
}
