//! In-memory record sink.

use crate::domain::errors::DomainResult;
use crate::domain::models::{Issue, IssueComment, IssueEvent};
use crate::domain::ports::RecordSink;

/// Accumulates normalized records in three ordered sequences.
///
/// Records are kept in call order. Nothing is deduplicated or indexed, so
/// loading the same project twice yields every record twice.
#[derive(Debug, Default, Clone)]
pub struct ProjectProcessor {
    issues: Vec<Issue>,
    issue_comments: Vec<IssueComment>,
    issue_events: Vec<IssueEvent>,
}

impl ProjectProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn issue_comments(&self) -> &[IssueComment] {
        &self.issue_comments
    }

    pub fn issue_events(&self) -> &[IssueEvent] {
        &self.issue_events
    }

    /// Total number of records across all three sequences.
    pub fn record_count(&self) -> usize {
        self.issues.len() + self.issue_comments.len() + self.issue_events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

impl RecordSink for ProjectProcessor {
    fn store_issue(&mut self, issue: Issue) -> DomainResult<()> {
        self.issues.push(issue);
        Ok(())
    }

    fn store_issue_comment(&mut self, comment: IssueComment) -> DomainResult<()> {
        self.issue_comments.push(comment);
        Ok(())
    }

    fn store_issue_event(&mut self, event: IssueEvent) -> DomainResult<()> {
        self.issue_events.push(event);
        Ok(())
    }
}
