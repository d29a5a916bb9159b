use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::core::google::auth::{SCOPE_DRIVE, SCOPE_PRESENTATIONS};
use crate::core::google::{DriveClient, GoogleAuth, ServiceAccountKey, SlidesClient, TokenProvider};
use crate::error::{NetworkError, Result};

/// Authenticated handles to both Google services, sharing one credential.
pub struct GoogleServices {
    pub slides: SlidesClient,
    pub drive: DriveClient,
    client_email: String,
}

impl GoogleServices {
    pub fn client_email(&self) -> &str {
        &self.client_email
    }
}

pub struct SimpleServices {
    config: Arc<Config>,
}

impl SimpleServices {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    pub fn create_http_client(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .user_agent(format!("lyrics-slides/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(self.config.request_timeout_seconds))
            .build()
            .map_err(NetworkError::Http)?;

        Ok(client)
    }

    /// Resolve credentials and build the Slides and Drive clients.
    ///
    /// Fails on missing or malformed credentials; performs no network I/O.
    pub fn connect_google(&self) -> Result<GoogleServices> {
        let key = ServiceAccountKey::resolve(
            &self.config.credentials_env,
            self.config.credentials_file.as_deref(),
        )?;
        let http = self.create_http_client()?;

        let auth = GoogleAuth::new(http.clone(), key, &[SCOPE_PRESENTATIONS, SCOPE_DRIVE])?;
        let client_email = auth.client_email().to_string();
        debug!("Using service account {}", client_email);

        let auth: Arc<dyn TokenProvider> = Arc::new(auth);
        Ok(GoogleServices {
            slides: SlidesClient::new(http.clone(), &self.config.slides_api_base, auth.clone()),
            drive: DriveClient::new(http, &self.config.drive_api_base, auth),
            client_email,
        })
    }
}
