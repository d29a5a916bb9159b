use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::core::lyrics::LyricsDocument;
use crate::error::Result;

#[derive(Args)]
pub struct PreviewArgs {
    /// Lyrics file (defaults to the configured lyrics path)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
}

pub async fn execute(args: PreviewArgs, config: &Config) -> Result<()> {
    let path = args.file.unwrap_or_else(|| config.lyrics_path.clone());
    let document = LyricsDocument::read(&path)?;
    let units = document.units()?;

    println!("📄 {}", document.path().display());
    println!("📊 {} slides\n", units.len());

    for (index, unit) in units.iter().enumerate() {
        println!("── Slide {} ({} lines) ──", index + 1, unit.line_count());
        println!("{}\n", unit);
    }

    Ok(())
}
