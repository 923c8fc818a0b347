//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::load::LoadArgs;

#[derive(Parser, Debug)]
#[command(name = "pie")]
#[command(about = "pie - load issues, comments and events from issue trackers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output one JSON object per line
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load every configured repository and print the collected records
    Load(LoadArgs),
}
