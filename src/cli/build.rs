use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::core::google::{DriveApi, SlidesApi};
use crate::core::lyrics::LyricsDocument;
use crate::core::presentation::{PresentationBuilder, PublishedPresentation};
use crate::core::report::ResultRecord;
use crate::error::Result;
use crate::services::SimpleServices;
use crate::utils::progress::{ProgressMessages, ProgressUtils};

#[derive(Args, Default)]
pub struct BuildArgs {
    /// Lyrics file (defaults to the configured lyrics path)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Presentation title
    #[arg(short, long)]
    title: Option<String>,

    /// Where to write the share link and slide count
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Leave the presentation private instead of sharing it
    #[arg(long)]
    no_share: bool,
}

/// Everything a run needs once the command line and config are merged.
struct BuildPlan {
    lyrics_path: PathBuf,
    title: String,
    output: PathBuf,
    share: bool,
    cleanup_on_failure: bool,
}

pub async fn execute(args: BuildArgs, services: &SimpleServices) -> Result<()> {
    let config = services.config();

    println!("{}", ProgressMessages::CONNECTING);
    let google = services.connect_google()?;
    info!("Authenticated as {}", google.client_email());

    let plan = BuildPlan {
        lyrics_path: args.file.unwrap_or_else(|| config.lyrics_path.clone()),
        title: args.title.unwrap_or_else(|| config.presentation_title.clone()),
        output: args.output.unwrap_or_else(|| config.result_path.clone()),
        share: !args.no_share,
        cleanup_on_failure: config.cleanup_on_failure,
    };

    let published = build_and_record(&plan, &google.slides, &google.drive).await?;

    println!("\n🎉 Done!");
    println!("📑 Title: {}", plan.title);
    println!("📝 ID: {}", published.id);
    println!("🔗 Link: {}", published.url);
    println!("📱 Slides: {}", published.slide_count);
    if !published.shared {
        println!("🔒 Sharing skipped (--no-share)");
    }

    Ok(())
}

/// Read, pair, publish and write the result file.
async fn build_and_record(
    plan: &BuildPlan,
    slides: &dyn SlidesApi,
    drive: &dyn DriveApi,
) -> Result<PublishedPresentation> {
    let document = LyricsDocument::read(&plan.lyrics_path)?;

    println!("{}", ProgressMessages::PAIRING);
    let units = document.units()?;
    println!("{}", ProgressMessages::slide_total(units.len()));

    println!("{}", ProgressMessages::BUILDING);
    let spinner = ProgressUtils::create_remote_spinner(&format!("Creating '{}'", plan.title));
    let published = PresentationBuilder::new(slides, drive)
        .cleanup_on_failure(plan.cleanup_on_failure)
        .share(plan.share)
        .publish(&plan.title, &units)
        .await;
    spinner.finish_and_clear();
    let published = published?;

    ResultRecord::from(&published).write(&plan.output)?;
    info!("Result saved to {}", plan.output.display());

    Ok(published)
}
