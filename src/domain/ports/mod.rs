//! Ports between the ingestion services and the outside world.

pub mod issue_source;
pub mod record_sink;

pub use issue_source::IssueSource;
pub use record_sink::RecordSink;
