//! Error handling for the lyrics-slides application
//!
//! This module provides a hierarchical error system with user-friendly error
//! messages. Every failure in a run ends up as a `LyricsSlidesError`, which the
//! entry point prints before returning.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LyricsSlidesError {
    #[error("Credentials error: {0}")]
    Credentials(#[from] CredentialsError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Google API error: {0}")]
    Api(#[from] ApiError),

    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Lyrics error: {0}")]
    Lyrics(#[from] LyricsError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("environment variable {var} is not set or empty")]
    Missing { var: String },

    #[error("credential payload is malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("credential file not readable: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("private key is invalid: {reason}")]
    InvalidKey { reason: String },

    #[error("token request rejected ({status}): {message}")]
    TokenRejected { status: u16, message: String },
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API response invalid: {reason}")]
    InvalidResponse { reason: String },
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{service} returned {status}: {message}")]
    Status {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("{service} response is missing {field}")]
    MissingField {
        service: &'static str,
        field: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum FileSystemError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine the configuration directory")]
    NoProjectDirs,
}

#[derive(Error, Debug)]
pub enum LyricsError {
    #[error("lyrics file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("lyrics are empty, nothing to put on slides")]
    Empty,
}

pub type Result<T> = std::result::Result<T, LyricsSlidesError>;

impl From<std::io::Error> for LyricsSlidesError {
    fn from(err: std::io::Error) -> Self {
        LyricsSlidesError::FileSystem(FileSystemError::Io(err))
    }
}

impl From<reqwest::Error> for LyricsSlidesError {
    fn from(err: reqwest::Error) -> Self {
        LyricsSlidesError::Network(NetworkError::Http(err))
    }
}

impl From<toml::de::Error> for LyricsSlidesError {
    fn from(err: toml::de::Error) -> Self {
        LyricsSlidesError::Config(ConfigError::InvalidFormat(err))
    }
}
