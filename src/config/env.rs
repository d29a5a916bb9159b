use std::env;
use std::path::PathBuf;
use crate::error::{Result, LyricsSlidesError};

/// Environment variable configuration constants
pub struct EnvVars;

impl EnvVars {
    pub const LYRICS_PATH: &'static str = "LYRICS_SLIDES_LYRICS_PATH";
    pub const RESULT_PATH: &'static str = "LYRICS_SLIDES_RESULT_PATH";
    pub const TITLE: &'static str = "LYRICS_SLIDES_TITLE";
    pub const CREDENTIALS_ENV: &'static str = "LYRICS_SLIDES_CREDENTIALS_ENV";
    pub const CREDENTIALS_FILE: &'static str = "LYRICS_SLIDES_CREDENTIALS_FILE";
    pub const SLIDES_API_BASE: &'static str = "LYRICS_SLIDES_SLIDES_API_BASE";
    pub const DRIVE_API_BASE: &'static str = "LYRICS_SLIDES_DRIVE_API_BASE";
    pub const REQUEST_TIMEOUT_SECONDS: &'static str = "LYRICS_SLIDES_REQUEST_TIMEOUT_SECONDS";
    pub const CLEANUP_ON_FAILURE: &'static str = "LYRICS_SLIDES_CLEANUP_ON_FAILURE";
}

/// Environment variable parsing utilities with validation
pub struct EnvParser;

impl EnvParser {
    /// Parse environment variable as string with validation
    pub fn parse_string(
        var_name: &str,
        validator: Option<fn(&str) -> Result<()>>,
    ) -> Result<Option<String>> {
        match env::var(var_name) {
            Ok(value) => {
                let trimmed = value.trim().to_string();
                if trimmed.is_empty() {
                    return Ok(None);
                }

                if let Some(validate_fn) = validator {
                    validate_fn(&trimmed)?;
                }

                Ok(Some(trimmed))
            }
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                Err(LyricsSlidesError::Validation(format!(
                    "Environment variable {} contains invalid UTF-8",
                    var_name
                )))
            }
        }
    }

    pub fn parse_path(var_name: &str) -> Result<Option<PathBuf>> {
        Ok(Self::parse_string(var_name, None)?.map(PathBuf::from))
    }

    /// Parse environment variable as boolean with validation
    pub fn parse_bool(var_name: &str) -> Result<Option<bool>> {
        if let Some(value_str) = Self::parse_string(var_name, None)? {
            match value_str.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(Some(true)),
                "false" | "0" | "no" | "off" => Ok(Some(false)),
                _ => Err(LyricsSlidesError::Validation(format!(
                    "Invalid boolean value in {}: '{}'. Use: true/false, 1/0, yes/no, on/off",
                    var_name, value_str
                )))
            }
        } else {
            Ok(None)
        }
    }

    /// Parse environment variable as u64 with range validation
    pub fn parse_u64(var_name: &str, min: u64, max: u64) -> Result<Option<u64>> {
        if let Some(value_str) = Self::parse_string(var_name, None)? {
            let value = value_str.parse::<u64>().map_err(|_| {
                LyricsSlidesError::Validation(format!(
                    "Invalid number in {}: '{}'. Must be a positive integer",
                    var_name, value_str
                ))
            })?;

            if value < min || value > max {
                return Err(LyricsSlidesError::Validation(format!(
                    "Value in {} must be between {} and {}, got {}",
                    var_name, min, max, value
                )));
            }

            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    /// All LYRICS_SLIDES_* variables, for `config` output
    pub fn get_all_app_vars() -> Vec<(String, String)> {
        let mut vars: Vec<(String, String)> = env::vars()
            .filter(|(key, _)| key.starts_with("LYRICS_SLIDES_"))
            .collect();
        vars.sort();
        vars
    }
}
