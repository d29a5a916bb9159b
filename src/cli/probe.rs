use clap::Args;
use tracing::{debug, info};

use crate::core::google::DriveApi;
use crate::error::Result;
use crate::services::SimpleServices;
use crate::utils::progress::{ProgressMessages, ProgressUtils};

const PROBE_MIME_TYPE: &str = "text/plain";

#[derive(Args)]
pub struct ProbeArgs {
    /// How many files to list as part of the check
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=100))]
    page_size: u32,
}

/// List files, then create and delete a throwaway file.
pub async fn execute(args: ProbeArgs, services: &SimpleServices) -> Result<()> {
    let google = services.connect_google()?;
    info!("Probing Drive as {}", google.client_email());

    println!("{}", ProgressMessages::PROBING);
    let spinner = ProgressUtils::create_remote_spinner("Listing files");
    let outcome = run_probe(&google.drive, args.page_size).await;
    spinner.finish_and_clear();
    let listed = outcome?;

    println!("✅ Drive reachable ({} files visible)", listed);
    println!("✅ Probe file created and deleted");
    Ok(())
}

async fn run_probe(drive: &dyn DriveApi, page_size: u32) -> Result<usize> {
    let files = drive.list_files(page_size).await?;
    for file in &files {
        debug!(
            "Visible file: {} ({}, {})",
            file.name,
            file.id,
            file.mime_type.as_deref().unwrap_or("unknown type")
        );
    }

    let name = format!("lyrics-slides-probe-{}", chrono::Utc::now().timestamp());
    let probe_id = drive.create_file(&name, PROBE_MIME_TYPE).await?;
    drive.delete_file(&probe_id).await?;

    Ok(files.len())
}
