use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress indicators shared by the commands
pub struct ProgressUtils;

impl ProgressUtils {
    /// Spinner shown while a remote call is in flight
    pub fn create_remote_spinner(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("valid spinner template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    }
}

/// Common progress messages
pub struct ProgressMessages;

impl ProgressMessages {
    pub const CONNECTING: &'static str = "🔧 Connecting to Google APIs...";
    pub const PAIRING: &'static str = "📝 Pairing lyric lines...";
    pub const BUILDING: &'static str = "🎨 Building Google Slides...";
    pub const PROBING: &'static str = "🔍 Checking Drive connectivity...";

    pub fn slide_total(count: usize) -> String {
        format!("📊 {} slides will be created", count)
    }
}
