mod catalog;
mod cli;
mod export;
mod extract;
mod report;
mod rules;
mod workbook;

use anyhow::Result;
use clap::Parser;

use cli::commands::extract::handle_extract_command;
use cli::commands::rules::handle_rules_command;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Extract(args) => handle_extract_command(args),
        Commands::Rules(args) => handle_rules_command(args),
    }
}
