pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "wordwise")]
#[command(about = "WordWise CLI - inspect route guarding and normalize stored documents")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        conflicts_with = "json",
        help = "Output in human-readable text format (default)"
    )]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show how the route guard treats a request path")]
    Route(commands::route::RouteArgs),

    #[command(about = "Normalize the timestamps of a stored document")]
    Normalize(commands::normalize::NormalizeArgs),

    #[command(about = "Bucket a Flesch reading-ease score")]
    Readability(commands::readability::ReadabilityArgs),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json && !cli.text {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Route(args) => commands::route::handle(args, output_format).await,
        Commands::Normalize(args) => commands::normalize::handle(args, output_format).await,
        Commands::Readability(args) => commands::readability::handle(args, output_format).await,
    }
}
