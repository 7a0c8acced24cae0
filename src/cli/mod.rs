// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// ClarityAI CLI
#[derive(Parser, Debug)]
#[command(name = "clarity-cli")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Keyword-driven web page analysis", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a page and print its analysis report
    Analyze(analyze::AnalyzeArgs),

    /// Fetch a page and print the extracted content
    Fetch(analyze::FetchArgs),

    /// Print version and feature information
    Version,
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze(args) => analyze::analyze(args).await,
        Commands::Fetch(args) => analyze::fetch(args).await,
        Commands::Version => {
            println!(
                "{}",
                serde_json::to_string_pretty(&crate::version::get_version_info())?
            );
            Ok(())
        }
    }
}
