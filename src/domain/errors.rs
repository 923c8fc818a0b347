//! Domain errors for the pie ingestion pipeline.

use std::fmt;

use thiserror::Error;

use crate::domain::models::SourceSystem;

/// The stage of a project load that a [`DomainError::Fetch`] wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// Listing the issues of a repository.
    Issues,
    /// Deriving lifecycle events for an issue.
    IssueEvents,
    /// Listing the comments of an issue.
    IssueComments,
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Issues => write!(f, "issues"),
            Self::IssueEvents => write!(f, "issue events"),
            Self::IssueComments => write!(f, "issue comments"),
        }
    }
}

/// Domain-level errors that can occur while loading project issues.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("{operation} request failed: {message}")]
    Transport { operation: String, message: String },

    #[error("{operation} returned {status}: {body}")]
    HttpStatus {
        operation: String,
        status: u16,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Unsupported source system: {0}")]
    UnsupportedSource(SourceSystem),

    #[error("Error fetching {phase}: {cause}")]
    Fetch {
        phase: FetchPhase,
        cause: Box<DomainError>,
    },
}

impl DomainError {
    /// Wrap this error with the phase it occurred in.
    pub fn in_phase(self, phase: FetchPhase) -> Self {
        Self::Fetch {
            phase,
            cause: Box::new(self),
        }
    }

    /// The innermost phase recorded on this error, if any.
    ///
    /// A comment page failing under an issue load reports
    /// [`FetchPhase::IssueComments`], not the outer [`FetchPhase::Issues`].
    pub fn failed_phase(&self) -> Option<FetchPhase> {
        match self {
            Self::Fetch { phase, cause } => cause.failed_phase().or(Some(*phase)),
            _ => None,
        }
    }

    /// Whether the error was caused by cancellation rather than a remote failure.
    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Cancelled => true,
            Self::Fetch { cause, .. } => cause.is_cancelled(),
            _ => false,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::MalformedResponse(err.to_string())
    }
}
