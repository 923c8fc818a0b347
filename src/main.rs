//! pie CLI entry point.

use clap::Parser;

use pie::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Load(args) => pie::cli::commands::load::execute(args, cli.json).await,
    };

    if let Err(err) = result {
        pie::cli::handle_error(err, cli.json);
    }
}
