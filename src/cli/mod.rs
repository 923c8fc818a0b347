//! Command-line interface for pie.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use thiserror::Error;

/// Exit code for fatal startup errors (configuration, logging setup)
pub const EXIT_FATAL: i32 = 1;

/// Exit code when at least one repository failed to load
pub const EXIT_PARTIAL: i32 = 2;

/// Exit code when the run was interrupted before every repository loaded
pub const EXIT_CANCELLED: i32 = 130;

/// Returned by `load` after all records were printed but some
/// repositories failed.
#[derive(Debug, Error)]
#[error("{failed} of {total} repositories failed to load")]
pub struct RepositoriesFailed {
    pub failed: usize,
    pub total: usize,
}

/// Returned by `load` when cancellation stopped the run early.
#[derive(Debug, Error)]
#[error("Ingestion cancelled: {loaded} of {total} repositories loaded")]
pub struct RunCancelled {
    pub loaded: usize,
    pub total: usize,
}

/// Map an error to its exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<RunCancelled>().is_some() {
        EXIT_CANCELLED
    } else if err.downcast_ref::<RepositoriesFailed>().is_some() {
        EXIT_PARTIAL
    } else {
        EXIT_FATAL
    }
}

/// Report a command error on stderr and exit the process.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let payload = serde_json::json!({
            "error": format!("{err:#}"),
        });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(exit_code(&err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ConfigError;

    #[test]
    fn test_exit_codes() {
        let partial = anyhow::Error::new(RepositoriesFailed { failed: 1, total: 3 });
        assert_eq!(exit_code(&partial), EXIT_PARTIAL);
        assert_eq!(partial.to_string(), "1 of 3 repositories failed to load");

        let cancelled = anyhow::Error::new(RunCancelled { loaded: 1, total: 3 });
        assert_eq!(exit_code(&cancelled), EXIT_CANCELLED);
        assert_eq!(
            cancelled.to_string(),
            "Ingestion cancelled: 1 of 3 repositories loaded"
        );

        let fatal = anyhow::Error::new(ConfigError::EmptyGitHubToken);
        assert_eq!(exit_code(&fatal), EXIT_FATAL);
    }
}
