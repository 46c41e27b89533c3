mod place;
mod ranking;
mod render;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::ranking::RankingArgs;

#[derive(Debug, Parser)]
#[command(name = "placescope")]
#[command(about = "Local-search profile and keyword ranking diagnostics")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score the completeness of a place profile
    AnalyzePlace {
        /// Place URL to analyze
        #[arg(long)]
        url: String,
    },
    /// Check where a business ranks for a set of keywords
    CheckRanking(RankingArgs),
    /// Run both checks and print the integrated report
    Report {
        /// Place URL to analyze
        #[arg(long)]
        url: String,
        #[command(flatten)]
        ranking: RankingArgs,
        /// Write the export document to this file or directory
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = placescope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::AnalyzePlace { url } => place::run_analyze_place(&config, &url, cli.json).await,
        Commands::CheckRanking(args) => ranking::run_check_ranking(&config, args, cli.json).await,
        Commands::Report {
            url,
            ranking,
            export,
        } => report::run_report(&config, &url, ranking, export.as_deref(), cli.json).await,
    }
}
