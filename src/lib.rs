//! pie - Project Issue Extractor
//!
//! pie loads issues, their comments, and lifecycle events derived from them
//! out of remote issue trackers and normalizes them into a small set of
//! in-memory records for downstream analysis.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): records, configuration model, errors, ports
//! - **Service Layer** (`services`): the in-memory record sink and the
//!   ingestion driver
//! - **Adapters** (`adapters`): source system integrations (GitHub)
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use pie::adapters::plugins::github_issues::load_github_project_issues;
//! use pie::services::ProjectProcessor;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut processor = ProjectProcessor::new();
//!     load_github_project_issues(&CancellationToken::new(), &mut processor, "ghp_...", "acme", "widgets")
//!         .await?;
//!     println!("{} issues", processor.issues().len());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult, FetchPhase};
pub use domain::models::{
    Config, Issue, IssueComment, IssueEvent, IssueEventType, Project, SourceSystem,
};
pub use domain::ports::{IssueSource, RecordSink};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{IngestionReport, IngestionService, ProjectProcessor};
