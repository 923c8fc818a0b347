//! Record sink port.
//!
//! Source adapters hand every normalized record to a [`RecordSink`]. The
//! sink decides what "storing" means; the in-memory
//! [`ProjectProcessor`](crate::services::ProjectProcessor) appends to
//! ordered sequences.

use crate::domain::errors::DomainResult;
use crate::domain::models::{Issue, IssueComment, IssueEvent};

/// Append-only collector for normalized records.
///
/// Implementations are driven by one caller at a time. A sink shared across
/// concurrent loaders must be wrapped behind a lock or fed through a channel.
pub trait RecordSink: Send {
    /// Store an issue.
    fn store_issue(&mut self, issue: Issue) -> DomainResult<()>;

    /// Store a comment posted on an issue.
    fn store_issue_comment(&mut self, comment: IssueComment) -> DomainResult<()>;

    /// Store a lifecycle event derived for an issue.
    fn store_issue_event(&mut self, event: IssueEvent) -> DomainResult<()>;
}
