use url::Url;
use crate::error::{Result, LyricsSlidesError};

/// Centralized configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate an http(s) URL string
    pub fn validate_url(url: &str, field_name: &str) -> Result<()> {
        let parsed = Url::parse(url).map_err(|e| {
            LyricsSlidesError::Validation(format!("Invalid {} URL '{}': {}", field_name, url, e))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(LyricsSlidesError::Validation(format!(
                "{} URL must use http or https, got: {}",
                field_name, url
            )));
        }
        Ok(())
    }

    /// Validate numeric range
    pub fn validate_range<T>(value: T, min: T, max: T, field_name: &str) -> Result<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(LyricsSlidesError::Validation(format!(
                "{} must be between {} and {}, got {}",
                field_name, min, max, value
            )));
        }
        Ok(())
    }

    pub fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(LyricsSlidesError::Validation(
                "Presentation title must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Environment variable names: ASCII letters, digits and underscores
    pub fn validate_env_name(name: &str) -> Result<()> {
        let valid = !name.is_empty()
            && !name.starts_with(|c: char| c.is_ascii_digit())
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !valid {
            return Err(LyricsSlidesError::Validation(format!(
                "Invalid credentials environment variable name: '{}'",
                name
            )));
        }
        Ok(())
    }
}
