//! GitHub Issues ingestion adapter.
//!
//! Walks every page of a repository's issues (open and closed), maps each
//! one to an [`Issue`], derives its lifecycle [`IssueEvent`]s and walks the
//! pages of its comments. Records are handed to the [`RecordSink`] as soon as
//! they are mapped, so a failure part way through leaves everything stored
//! before it in place.
//!
//! Per issue, records are stored in this order: the issue, its `Created`
//! event, its `Closed` event (closed issues only), then each comment
//! followed by its `CommentAdded` event.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::errors::{DomainError, DomainResult, FetchPhase};
use crate::domain::models::{
    GitHubConfig, Issue, IssueComment, IssueEvent, IssueEventType, Project, SourceSystem,
};
use crate::domain::ports::{IssueSource, RecordSink};

use super::client::GitHubClient;
use super::models::{GitHubIssue, GitHubIssueComment};

/// Counts of what one project load stored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct LoadSummary {
    issue_pages: u32,
    issues: usize,
    skipped_pull_requests: usize,
    comments: usize,
    events: usize,
}

/// Loads issues, comments and derived events from GitHub repositories.
#[derive(Debug, Clone)]
pub struct GitHubIssueSource {
    client: GitHubClient,
    skip_pull_requests: bool,
}

impl GitHubIssueSource {
    pub fn new(client: GitHubClient) -> Self {
        Self {
            client,
            skip_pull_requests: false,
        }
    }

    /// Build a source from the access token and the `[github]` settings.
    pub fn from_config(token: String, config: &GitHubConfig) -> DomainResult<Self> {
        Ok(Self {
            client: GitHubClient::with_config(token, config)?,
            skip_pull_requests: config.skip_pull_requests,
        })
    }

    async fn fetch_issues(
        &self,
        cancel: &CancellationToken,
        sink: &mut dyn RecordSink,
        project: &Project,
        summary: &mut LoadSummary,
    ) -> DomainResult<()> {
        let mut page = 1;

        loop {
            let issues = self
                .client
                .list_issues_page(cancel, &project.owner, &project.name, page)
                .await?;
            summary.issue_pages += 1;

            tracing::debug!(
                project = %project,
                page = page,
                count = issues.items.len(),
                next_page = ?issues.next_page,
                "Fetched GitHub issues page"
            );

            for github_issue in &issues.items {
                if self.skip_pull_requests && github_issue.pull_request.is_some() {
                    summary.skipped_pull_requests += 1;
                    continue;
                }

                let assignee = assignee_username(github_issue)?;
                sink.store_issue(to_issue(project, github_issue, &assignee)?)?;
                summary.issues += 1;

                summary.events += store_issue_events(sink, project, github_issue, &assignee)
                    .map_err(|e| e.in_phase(FetchPhase::IssueEvents))?;

                let (comments, events) = self
                    .fetch_issue_comments(cancel, sink, project, github_issue, &assignee)
                    .await
                    .map_err(|e| e.in_phase(FetchPhase::IssueComments))?;
                summary.comments += comments;
                summary.events += events;
            }

            match issues.next_page {
                None => return Ok(()),
                Some(next) => page = advance(page, next, "GitHub list_issues")?,
            }
        }
    }

    /// Store every comment of an issue, each paired with a `CommentAdded`
    /// event. Returns the number of comments and events stored.
    async fn fetch_issue_comments(
        &self,
        cancel: &CancellationToken,
        sink: &mut dyn RecordSink,
        project: &Project,
        github_issue: &GitHubIssue,
        assignee: &str,
    ) -> DomainResult<(usize, usize)> {
        let mut page = 1;
        let mut stored = 0;

        loop {
            let comments = self
                .client
                .list_comments_page(
                    cancel,
                    &project.owner,
                    &project.name,
                    github_issue.number,
                    page,
                )
                .await?;

            for github_comment in &comments.items {
                let comment = to_issue_comment(project, github_issue.id, github_comment)?;
                let timestamp = comment.created_at;
                sink.store_issue_comment(comment)?;
                sink.store_issue_event(issue_event(
                    project,
                    github_issue.id,
                    IssueEventType::CommentAdded,
                    assignee,
                    timestamp,
                ))?;
                stored += 1;
            }

            match comments.next_page {
                None => return Ok((stored, stored)),
                Some(next) => page = advance(page, next, "GitHub list_comments")?,
            }
        }
    }
}

#[async_trait]
impl IssueSource for GitHubIssueSource {
    fn source_system(&self) -> SourceSystem {
        SourceSystem::GitHub
    }

    async fn load_project(
        &self,
        cancel: &CancellationToken,
        sink: &mut dyn RecordSink,
        owner: &str,
        name: &str,
    ) -> DomainResult<()> {
        let project = Project::new(SourceSystem::GitHub, owner, name);
        let mut summary = LoadSummary::default();

        tracing::info!(
            project = %project,
            skip_pull_requests = self.skip_pull_requests,
            "Loading GitHub issues"
        );

        let result = self
            .fetch_issues(cancel, sink, &project, &mut summary)
            .await
            .map_err(|e| e.in_phase(FetchPhase::Issues));

        tracing::info!(
            project = %project,
            pages = summary.issue_pages,
            issues = summary.issues,
            comments = summary.comments,
            events = summary.events,
            skipped_pull_requests = summary.skipped_pull_requests,
            complete = result.is_ok(),
            "GitHub issue load finished"
        );

        result
    }
}

/// Load every issue of `owner/repo` from the public GitHub API into `sink`.
///
/// Uses the default page size and keeps pull requests. Use
/// [`GitHubIssueSource::from_config`] for other settings.
pub async fn load_github_project_issues(
    cancel: &CancellationToken,
    sink: &mut dyn RecordSink,
    access_token: &str,
    owner: &str,
    repo: &str,
) -> DomainResult<()> {
    if access_token.is_empty() {
        return Err(DomainError::ValidationFailed(
            "GitHub access token is empty".to_string(),
        ));
    }

    GitHubIssueSource::new(GitHubClient::new(access_token.to_string()))
        .load_project(cancel, sink, owner, repo)
        .await
}

/// Move to the next page, refusing links that do not move forward.
fn advance(current: u32, next: u32, operation: &str) -> DomainResult<u32> {
    if next > current {
        Ok(next)
    } else {
        Err(DomainError::MalformedResponse(format!(
            "{operation} advertised next page {next} after page {current}"
        )))
    }
}

fn assignee_username(github_issue: &GitHubIssue) -> DomainResult<String> {
    match &github_issue.assignee {
        None => Ok(String::new()),
        Some(user) => user.login.clone().ok_or_else(|| {
            DomainError::MalformedResponse(format!(
                "issue {} has an assignee without a login",
                github_issue.id
            ))
        }),
    }
}

fn to_issue(project: &Project, github_issue: &GitHubIssue, assignee: &str) -> DomainResult<Issue> {
    let labels = github_issue
        .labels
        .iter()
        .map(|label| {
            label.name.clone().ok_or_else(|| {
                DomainError::MalformedResponse(format!(
                    "issue {} has a label without a name",
                    github_issue.id
                ))
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(Issue {
        project: project.clone(),
        id: github_issue.id,
        parent_id: 0,
        assignee_username: assignee.to_string(),
        title: github_issue.title.clone().unwrap_or_default(),
        description: github_issue.body.clone().unwrap_or_default(),
        labels,
        created_at: github_issue.created_at,
    })
}

fn to_issue_comment(
    project: &Project,
    issue_id: u64,
    github_comment: &GitHubIssueComment,
) -> DomainResult<IssueComment> {
    let username = github_comment
        .user
        .as_ref()
        .and_then(|user| user.login.clone())
        .ok_or_else(|| {
            DomainError::MalformedResponse(format!(
                "comment {} has no author login",
                github_comment.id
            ))
        })?;
    let body = github_comment.body.clone().ok_or_else(|| {
        DomainError::MalformedResponse(format!("comment {} has no body", github_comment.id))
    })?;

    Ok(IssueComment {
        project: project.clone(),
        issue_id,
        id: github_comment.id,
        username,
        body,
        created_at: github_comment.created_at,
    })
}

/// Store the `Created` event and, for closed issues, the `Closed` event.
///
/// The assignee on both is the issue's current assignee; GitHub does not
/// expose the historical value cheaply.
fn store_issue_events(
    sink: &mut dyn RecordSink,
    project: &Project,
    github_issue: &GitHubIssue,
    assignee: &str,
) -> DomainResult<usize> {
    sink.store_issue_event(issue_event(
        project,
        github_issue.id,
        IssueEventType::Created,
        assignee,
        github_issue.created_at,
    ))?;

    let Some(closed_at) = github_issue.closed_at else {
        return Ok(1);
    };

    sink.store_issue_event(issue_event(
        project,
        github_issue.id,
        IssueEventType::Closed,
        assignee,
        closed_at,
    ))?;
    Ok(2)
}

fn issue_event(
    project: &Project,
    issue_id: u64,
    event_type: IssueEventType,
    assignee: &str,
    timestamp: chrono::DateTime<chrono::Utc>,
) -> IssueEvent {
    IssueEvent {
        project: project.clone(),
        id: issue_id,
        parent_id: 0,
        event_type,
        assignee_username: assignee.to_string(),
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::plugins::github_issues::models::{GitHubLabel, GitHubUser};
    use crate::services::ProjectProcessor;
    use chrono::{TimeZone, Utc};

    fn project() -> Project {
        Project::new(SourceSystem::GitHub, "my-org", "my-repo")
    }

    fn make_github_issue(id: u64, labels: Vec<&str>) -> GitHubIssue {
        GitHubIssue {
            id,
            number: id,
            title: Some(format!("Issue {id}")),
            body: Some("Issue description".to_string()),
            labels: labels
                .into_iter()
                .map(|n| GitHubLabel {
                    name: Some(n.to_string()),
                })
                .collect(),
            assignee: None,
            pull_request: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 14, 8, 0, 0).unwrap(),
            closed_at: None,
        }
    }

    // ── Mapping ─────────────────────────────────────────────────────────────

    #[test]
    fn test_to_issue_keeps_label_order() {
        let issue = make_github_issue(42, vec!["zeta", "alpha", "mid"]);
        let mapped = to_issue(&project(), &issue, "").unwrap();

        assert_eq!(mapped.id, 42);
        assert_eq!(mapped.parent_id, 0);
        assert_eq!(mapped.labels, vec!["zeta", "alpha", "mid"]);
        assert_eq!(mapped.project, project());
    }

    #[test]
    fn test_to_issue_defaults_missing_text() {
        let mut issue = make_github_issue(1, vec![]);
        issue.title = None;
        issue.body = None;
        let mapped = to_issue(&project(), &issue, "").unwrap();

        assert_eq!(mapped.title, "");
        assert_eq!(mapped.description, "");
    }

    #[test]
    fn test_label_without_name_is_malformed() {
        let mut issue = make_github_issue(1, vec!["bug"]);
        issue.labels.push(GitHubLabel { name: None });

        let err = to_issue(&project(), &issue, "").unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[test]
    fn test_assignee_username() {
        let mut issue = make_github_issue(1, vec![]);
        assert_eq!(assignee_username(&issue).unwrap(), "");

        issue.assignee = Some(GitHubUser {
            login: Some("alice".to_string()),
        });
        assert_eq!(assignee_username(&issue).unwrap(), "alice");

        issue.assignee = Some(GitHubUser { login: None });
        assert!(matches!(
            assignee_username(&issue),
            Err(DomainError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_comment_mapping_links_issue() {
        let comment = GitHubIssueComment {
            id: 500,
            user: Some(GitHubUser {
                login: Some("bob".to_string()),
            }),
            body: Some("Looks good".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        };

        let mapped = to_issue_comment(&project(), 42, &comment).unwrap();
        assert_eq!(mapped.issue_id, 42);
        assert_eq!(mapped.id, 500);
        assert_eq!(mapped.username, "bob");
    }

    #[test]
    fn test_comment_without_author_is_malformed() {
        let comment = GitHubIssueComment {
            id: 500,
            user: None,
            body: Some("orphan".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        };
        assert!(matches!(
            to_issue_comment(&project(), 42, &comment),
            Err(DomainError::MalformedResponse(_))
        ));
    }

    // ── Event derivation ────────────────────────────────────────────────────

    #[test]
    fn test_open_issue_gets_only_created_event() {
        let mut sink = ProjectProcessor::new();
        let issue = make_github_issue(1, vec![]);

        let stored = store_issue_events(&mut sink, &project(), &issue, "").unwrap();
        assert_eq!(stored, 1);
        assert_eq!(sink.issue_events()[0].event_type, IssueEventType::Created);
        assert_eq!(sink.issue_events()[0].timestamp, issue.created_at);
    }

    #[test]
    fn test_closed_issue_gets_created_then_closed() {
        let mut sink = ProjectProcessor::new();
        let mut issue = make_github_issue(2, vec![]);
        let closed_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        issue.closed_at = Some(closed_at);

        let stored = store_issue_events(&mut sink, &project(), &issue, "alice").unwrap();
        assert_eq!(stored, 2);

        let events = sink.issue_events();
        assert_eq!(events[0].event_type, IssueEventType::Created);
        assert_eq!(events[1].event_type, IssueEventType::Closed);
        assert_eq!(events[1].timestamp, closed_at);
        assert!(events.iter().all(|e| e.assignee_username == "alice" && e.id == 2));
    }

    #[test]
    fn test_advance_rejects_backwards_links() {
        assert_eq!(advance(1, 2, "op").unwrap(), 2);
        assert!(advance(3, 3, "op").is_err());
        assert!(advance(3, 1, "op").is_err());
    }

    #[tokio::test]
    async fn test_load_rejects_empty_token() {
        let mut sink = ProjectProcessor::new();
        let result =
            load_github_project_issues(&CancellationToken::new(), &mut sink, "", "o", "r").await;
        assert!(matches!(result, Err(DomainError::ValidationFailed(_))));
        assert!(sink.is_empty());
    }
}
