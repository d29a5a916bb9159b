use clap::Args;

use crate::config::env::EnvParser;
use crate::config::Config;
use crate::error::Result;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the effective configuration to the config file
    #[arg(long)]
    init: bool,
}

pub async fn execute(args: ConfigArgs, config: &Config) -> Result<()> {
    let path = Config::config_path()?;

    if args.init {
        config.save(&path)?;
        println!("✅ Configuration written to {}", path.display());
        return Ok(());
    }

    println!("⚙️  Configuration ({})", path.display());
    println!("  Lyrics file:        {}", config.lyrics_path.display());
    println!("  Result file:        {}", config.result_path.display());
    println!("  Presentation title: {}", config.presentation_title);
    println!("  Credentials env:    {}", config.credentials_env);
    match &config.credentials_file {
        Some(file) => println!("  Credentials file:   {}", file.display()),
        None => println!("  Credentials file:   (none)"),
    }
    println!("  Slides API:         {}", config.slides_api_base);
    println!("  Drive API:          {}", config.drive_api_base);
    println!("  Request timeout:    {}s", config.request_timeout_seconds);
    println!("  Cleanup on failure: {}", config.cleanup_on_failure);

    let overrides = EnvParser::get_all_app_vars();
    if !overrides.is_empty() {
        println!("\n🌍 Environment overrides:");
        for (key, value) in overrides {
            println!("  {}={}", key, value);
        }
    }

    Ok(())
}
