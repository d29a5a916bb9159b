use clap::{Parser, Subcommand};

mod cli;
mod config;
mod core;
mod error;
mod services;
mod utils;

use config::Config;
use error::Result;
use services::SimpleServices;

#[derive(Parser)]
#[command(name = "lyrics-slides")]
#[command(about = "Turn a lyrics file into a shared Google Slides prompter deck")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, fill and share a presentation from the lyrics file
    Build(cli::build::BuildArgs),

    /// Show how the lyrics will be split into slides
    Preview(cli::preview::PreviewArgs),

    /// Check Drive connectivity with a throwaway file
    Probe(cli::probe::ProbeArgs),

    /// Show configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = utils::logging::init_logging(cli.verbose) {
        eprintln!("⚠️  Logging unavailable: {}", e);
    }

    // Every failure ends the run with a message; there is no exit-code contract.
    if let Err(e) = run(cli).await {
        eprintln!("❌ Error: {}", e);
        if let error::LyricsSlidesError::Lyrics(error::LyricsError::FileNotFound { .. }) = e {
            eprintln!("💡 Put the lyrics into lyrics.txt, or pass --file.");
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let services = SimpleServices::new(config);
    let config = services.config();

    match cli.command {
        Some(Commands::Build(args)) => cli::build::execute(args, &services).await,
        Some(Commands::Preview(args)) => cli::preview::execute(args, &config).await,
        Some(Commands::Probe(args)) => cli::probe::execute(args, &services).await,
        Some(Commands::Config(args)) => cli::config::execute(args, &config).await,
        None => cli::build::execute(cli::build::BuildArgs::default(), &services).await,
    }
}
