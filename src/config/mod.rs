use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use tracing::debug;

use crate::error::{ConfigError, Result};

pub mod env;
pub mod validation;

use env::{EnvParser, EnvVars};
use validation::ConfigValidator;

pub const DEFAULT_SLIDES_API_BASE: &str = "https://slides.googleapis.com";
pub const DEFAULT_DRIVE_API_BASE: &str = "https://www.googleapis.com";

fn default_request_timeout_seconds() -> u64 {
    30
}

fn default_cleanup_on_failure() -> bool {
    true
}

fn validate_slides_url(url: &str) -> Result<()> {
    ConfigValidator::validate_url(url, "Slides API")
}

fn validate_drive_url(url: &str) -> Result<()> {
    ConfigValidator::validate_url(url, "Drive API")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Lyrics input file
    pub lyrics_path: PathBuf,

    /// File receiving the share link and slide count
    pub result_path: PathBuf,

    /// Title of the created presentation
    pub presentation_title: String,

    /// Environment variable holding the service-account JSON
    pub credentials_env: String,

    /// Service-account key file, used when the environment variable is unset
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,

    /// Slides API root
    pub slides_api_base: String,

    /// Drive API root
    pub drive_api_base: String,

    /// Per-request HTTP timeout (seconds)
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    /// Delete the presentation again if the slide batch fails
    #[serde(default = "default_cleanup_on_failure")]
    pub cleanup_on_failure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lyrics_path: PathBuf::from("lyrics.txt"),
            result_path: PathBuf::from("result.txt"),
            presentation_title: "Lyrics Prompter".to_string(),
            credentials_env: "GOOGLE_CREDENTIALS".to_string(),
            credentials_file: None,
            slides_api_base: DEFAULT_SLIDES_API_BASE.to_string(),
            drive_api_base: DEFAULT_DRIVE_API_BASE.to_string(),
            request_timeout_seconds: default_request_timeout_seconds(),
            cleanup_on_failure: default_cleanup_on_failure(),
        }
    }
}

impl Config {
    /// Defaults, then the config file, then `LYRICS_SLIDES_*` variables.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Try to load .env file if it exists (for CI and development)
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(ConfigError::FileNotFound { path }.into());
                }
                config = Self::from_file(&path)?;
            }
            None => {
                if let Ok(path) = Self::default_config_path() {
                    if path.exists() {
                        config = Self::from_file(&path)?;
                    }
                }
            }
        }

        config.load_from_env()?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from environment variables
    fn load_from_env(&mut self) -> Result<()> {
        if let Some(path) = EnvParser::parse_path(EnvVars::LYRICS_PATH)? {
            self.lyrics_path = path;
        }

        if let Some(path) = EnvParser::parse_path(EnvVars::RESULT_PATH)? {
            self.result_path = path;
        }

        if let Some(title) = EnvParser::parse_string(EnvVars::TITLE, None)? {
            self.presentation_title = title;
        }

        if let Some(var) = EnvParser::parse_string(EnvVars::CREDENTIALS_ENV, None)? {
            self.credentials_env = var;
        }

        if let Some(path) = EnvParser::parse_path(EnvVars::CREDENTIALS_FILE)? {
            self.credentials_file = Some(path);
        }

        if let Some(url) = EnvParser::parse_string(
            EnvVars::SLIDES_API_BASE,
            Some(validate_slides_url),
        )? {
            self.slides_api_base = url;
        }

        if let Some(url) = EnvParser::parse_string(
            EnvVars::DRIVE_API_BASE,
            Some(validate_drive_url),
        )? {
            self.drive_api_base = url;
        }

        if let Some(timeout) = EnvParser::parse_u64(EnvVars::REQUEST_TIMEOUT_SECONDS, 1, 600)? {
            self.request_timeout_seconds = timeout;
        }

        if let Some(cleanup) = EnvParser::parse_bool(EnvVars::CLEANUP_ON_FAILURE)? {
            self.cleanup_on_failure = cleanup;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate_url(&self.slides_api_base, "Slides API")?;
        ConfigValidator::validate_url(&self.drive_api_base, "Drive API")?;
        ConfigValidator::validate_range(self.request_timeout_seconds, 1, 600, "request timeout")?;
        ConfigValidator::validate_title(&self.presentation_title)?;
        ConfigValidator::validate_env_name(&self.credentials_env)?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn default_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("net", "lyrics-slides", "lyrics-slides")
            .ok_or(ConfigError::NoProjectDirs)?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Self::default_config_path()
    }
}
