//! Google REST integrations
//!
//! - `auth`: service-account OAuth2 token flow
//! - `slides`: Slides API v1 (presentations, batch updates)
//! - `drive`: Drive API v3 (files, permissions)

pub mod auth;
pub mod drive;
pub mod slides;

#[cfg(test)]
pub(crate) mod stub_server;

use serde::Deserialize;

use crate::error::{ApiError, Result};

pub use auth::{GoogleAuth, ServiceAccountKey, TokenProvider};
pub use drive::{DriveApi, DriveClient};
pub use slides::{SlidesApi, SlidesClient};

#[derive(Deserialize)]
struct GoogleErrorBody {
    error: GoogleErrorDetail,
}

#[derive(Deserialize)]
struct GoogleErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Pass successful responses through; turn anything else into `ApiError::Status`.
pub(crate) async fn check_status(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        service,
        status: status.as_u16(),
        message: error_message(&body),
    }
    .into())
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<GoogleErrorBody>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(status) if !parsed.error.message.is_empty() => {
                format!("{} ({})", parsed.error.message, status)
            }
            Some(status) => status,
            None => parsed.error.message,
        },
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
