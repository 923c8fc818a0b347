//! Service layer: the in-memory record sink and the ingestion driver.

pub mod ingestion_service;
pub mod project_processor;

pub use ingestion_service::{IngestionReport, IngestionService, RepositoryFailure};
pub use project_processor::ProjectProcessor;
