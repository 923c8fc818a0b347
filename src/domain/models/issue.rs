//! Normalized issue-tracking records.
//!
//! Every record embeds the [`Project`] it was loaded from by value. The
//! records form an append log: a later load of the same issue produces a new,
//! separate record rather than updating an existing one.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The remote platform hosting issue data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceSystem {
    GitHub = 0,
    Jira = 1,
}

impl fmt::Display for SourceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GitHub => write!(f, "github"),
            Self::Jira => write!(f, "jira"),
        }
    }
}

/// Kind of lifecycle transition recorded by an [`IssueEvent`].
///
/// Only `Created`, `Closed` and `CommentAdded` are derived today; the other
/// variants are reserved for sources that expose richer history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueEventType {
    Created = 0,
    Updated = 1,
    Closed = 2,
    CommentAdded = 3,
    Reopened = 4,
    Assigned = 5,
    Resolved = 6,
}

impl fmt::Display for IssueEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Closed => "closed",
            Self::CommentAdded => "comment_added",
            Self::Reopened => "reopened",
            Self::Assigned => "assigned",
            Self::Resolved => "resolved",
        };
        f.write_str(name)
    }
}

/// A tracked repository, identified by source system, owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    /// Source system the project lives on.
    pub source_system: SourceSystem,
    /// Organisation or user owning the project.
    pub owner: String,
    /// Project (repository) name.
    pub name: String,
}

impl Project {
    pub fn new(source_system: SourceSystem, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            source_system,
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.source_system, self.owner, self.name)
    }
}

/// One tracked work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub project: Project,
    /// Numeric id assigned by the source system.
    pub id: u64,
    /// Parent issue id, `0` when the issue has no parent.
    pub parent_id: u64,
    /// Assignee username, empty when unassigned.
    pub assignee_username: String,
    pub title: String,
    pub description: String,
    /// Label names in the order the source returned them.
    pub labels: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} parent={} {:?} assignee={:?} labels=[{}] created_at={} description={:?}",
            self.project,
            self.id,
            self.parent_id,
            self.title,
            self.assignee_username,
            self.labels.join(", "),
            self.created_at.to_rfc3339(),
            self.description,
        )
    }
}

/// One comment posted on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueComment {
    pub project: Project,
    /// Id of the issue the comment is attached to.
    pub issue_id: u64,
    /// Numeric id of the comment itself.
    pub id: u64,
    /// Author username.
    pub username: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for IssueComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} issue={} comment={} by {:?} created_at={} body={:?}",
            self.project,
            self.issue_id,
            self.id,
            self.username,
            self.created_at.to_rfc3339(),
            self.body,
        )
    }
}

/// A lifecycle event derived for an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueEvent {
    pub project: Project,
    /// Id of the issue the event belongs to.
    pub id: u64,
    /// Parent issue id, `0` when the issue has no parent.
    pub parent_id: u64,
    #[serde(rename = "type")]
    pub event_type: IssueEventType,
    /// Assignee username when the record was derived, empty when unassigned.
    pub assignee_username: String,
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for IssueEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} issue={} parent={} {} assignee={:?} at {}",
            self.project,
            self.id,
            self.parent_id,
            self.event_type,
            self.assignee_username,
            self.timestamp.to_rfc3339(),
        )
    }
}
