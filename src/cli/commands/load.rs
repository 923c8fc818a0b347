//! Implementation of the `pie load` command.

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

use crate::adapters::plugins::create_issue_source;
use crate::cli::output::{write_output, write_records, FailureLine};
use crate::cli::{RepositoriesFailed, RunCancelled};
use crate::domain::models::SourceSystem;
use crate::infrastructure::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use crate::infrastructure::logging::LoggerImpl;
use crate::services::{IngestionReport, IngestionService, ProjectProcessor};

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Path to the TOML configuration file
    #[arg(short, long, env = "PIE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

pub async fn execute(args: LoadArgs, json_mode: bool) -> Result<()> {
    let config = ConfigLoader::load_from_file(&args.config)?;
    let _logger = LoggerImpl::init(&config.logging).context("Failed to initialize logging")?;

    tracing::info!(
        config = %args.config.display(),
        repositories = config.github_repos.len(),
        "Configuration loaded"
    );

    let source = create_issue_source(SourceSystem::GitHub, &config)?;
    let service = IngestionService::new(source);

    let cancel = CancellationToken::new();
    let ctrl_c = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupt received, cancelling ingestion");
                cancel.cancel();
            }
        })
    };

    let mut processor = ProjectProcessor::new();
    let report = service
        .run(&cancel, &mut processor, &config.github_repos)
        .await;
    ctrl_c.abort();

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_records(&mut writer, &processor, json_mode).context("Failed to write records")?;

    if report.is_success() {
        return Ok(());
    }

    let mut stderr = io::stderr().lock();
    for failure in &report.failures {
        write_output(&mut stderr, &FailureLine::from(failure), json_mode)
            .context("Failed to write failure report")?;
    }
    stderr.flush().context("Failed to write failure report")?;

    run_outcome(&report, config.github_repos.len())
}

/// Turn a finished run into the command result.
///
/// Cancellation takes precedence over repository failures; the repository
/// in flight when the run was cancelled is also listed as a failure.
fn run_outcome(report: &IngestionReport, total: usize) -> Result<()> {
    if report.cancelled {
        return Err(RunCancelled {
            loaded: report.loaded.len(),
            total,
        }
        .into());
    }
    if !report.failures.is_empty() {
        return Err(RepositoriesFailed {
            failed: report.failures.len(),
            total,
        }
        .into());
    }
    Ok(())
}
