//! Issue source port.
//!
//! One implementation exists per [`SourceSystem`]. The ingestion service only
//! talks to sources through this trait, so adding a system does not touch
//! the sink or the record model.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::errors::DomainResult;
use crate::domain::models::SourceSystem;
use crate::domain::ports::RecordSink;

/// Port for adapters that load every issue of one project into a sink.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// The source system this adapter reads from.
    fn source_system(&self) -> SourceSystem;

    /// Load all issues, comments and derived events for `owner/name`.
    ///
    /// Records are stored as they are fetched. On error, records stored
    /// before the failure stay in the sink.
    async fn load_project(
        &self,
        cancel: &CancellationToken,
        sink: &mut dyn RecordSink,
        owner: &str,
        name: &str,
    ) -> DomainResult<()>;
}
