use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

pub fn init_logging(verbose: bool) -> Result<()> {
    install_subscriber(verbose)?;
    Ok(())
}

fn install_subscriber(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
        // Filter out noisy dependencies
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("rustls=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;

    Ok(())
}
