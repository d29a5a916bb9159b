use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{check_status, TokenProvider};
use crate::error::{ApiError, NetworkError, Result};

const SERVICE: &str = "Drive";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionRole {
    Reader,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionType {
    Anyone,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Drive operations used for sharing, probing and cleanup.
#[async_trait]
pub trait DriveApi: Send + Sync {
    async fn create_permission(
        &self,
        file_id: &str,
        role: PermissionRole,
        kind: PermissionType,
    ) -> Result<()>;

    async fn list_files(&self, page_size: u32) -> Result<Vec<DriveFile>>;

    async fn create_file(&self, name: &str, mime_type: &str) -> Result<String>;

    async fn delete_file(&self, file_id: &str) -> Result<()>;
}

#[derive(Serialize)]
struct PermissionBody {
    role: PermissionRole,
    #[serde(rename = "type")]
    kind: PermissionType,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileMetadata<'a> {
    name: &'a str,
    mime_type: &'a str,
}

#[derive(Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Deserialize)]
struct CreatedFile {
    id: Option<String>,
}

/// Google Drive v3 REST client
#[derive(Clone)]
pub struct DriveClient {
    client: reqwest::Client,
    base_url: String,
    auth: Arc<dyn TokenProvider>,
}

impl DriveClient {
    pub fn new(client: reqwest::Client, base_url: &str, auth: Arc<dyn TokenProvider>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    fn files_url(&self) -> String {
        format!("{}/drive/v3/files", self.base_url)
    }

    fn invalid(call: &str, e: reqwest::Error) -> NetworkError {
        NetworkError::InvalidResponse {
            reason: format!("{}: {}", call, e),
        }
    }
}

#[async_trait]
impl DriveApi for DriveClient {
    async fn create_permission(
        &self,
        file_id: &str,
        role: PermissionRole,
        kind: PermissionType,
    ) -> Result<()> {
        let token = self.auth.access_token().await?;
        debug!("Granting {:?}/{:?} on {}", role, kind, file_id);

        let url = format!("{}/{}/permissions", self.files_url(), file_id);
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&PermissionBody { role, kind })
            .send()
            .await?;

        check_status(SERVICE, response).await?;
        info!("Sharing permission created on {}", file_id);
        Ok(())
    }

    async fn list_files(&self, page_size: u32) -> Result<Vec<DriveFile>> {
        let token = self.auth.access_token().await?;
        let page_size = page_size.to_string();

        let response = self
            .client
            .get(self.files_url())
            .bearer_auth(token)
            .query(&[
                ("pageSize", page_size.as_str()),
                ("fields", "files(id,name,mimeType)"),
            ])
            .send()
            .await?;

        let response = check_status(SERVICE, response).await?;
        let list: FileList = response
            .json()
            .await
            .map_err(|e| Self::invalid("files.list", e))?;

        debug!("Drive returned {} files", list.files.len());
        Ok(list.files)
    }

    async fn create_file(&self, name: &str, mime_type: &str) -> Result<String> {
        let token = self.auth.access_token().await?;

        let response = self
            .client
            .post(self.files_url())
            .bearer_auth(token)
            .json(&FileMetadata { name, mime_type })
            .send()
            .await?;

        let response = check_status(SERVICE, response).await?;
        let created: CreatedFile = response
            .json()
            .await
            .map_err(|e| Self::invalid("files.create", e))?;

        let id = created.id.ok_or(ApiError::MissingField {
            service: SERVICE,
            field: "id",
        })?;
        debug!("Created Drive file {} ({})", name, id);
        Ok(id)
    }

    async fn delete_file(&self, file_id: &str) -> Result<()> {
        let token = self.auth.access_token().await?;

        let url = format!("{}/{}", self.files_url(), file_id);
        let response = self.client.delete(url).bearer_auth(token).send().await?;

        check_status(SERVICE, response).await?;
        debug!("Deleted Drive file {}", file_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::google::stub_server::{http_client, StaticToken, StubServer};
    use crate::error::LyricsSlidesError;
    use serde_json::json;

    fn client_for(server: &StubServer) -> DriveClient {
        DriveClient::new(http_client(), server.url(), Arc::new(StaticToken))
    }

    #[test]
    fn test_public_read_permission_body() {
        let body = PermissionBody {
            role: PermissionRole::Reader,
            kind: PermissionType::Anyone,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"role": "reader", "type": "anyone"})
        );
    }

    #[test]
    fn test_file_list_parses_partial_fields() {
        let list: FileList = serde_json::from_value(json!({
            "files": [
                {
                    "id": "1abc",
                    "name": "Lyrics Prompter",
                    "mimeType": "application/vnd.google-apps.presentation"
                },
                {"id": "2def"}
            ]
        }))
        .unwrap();

        assert_eq!(list.files.len(), 2);
        assert_eq!(list.files[0].name, "Lyrics Prompter");
        assert_eq!(list.files[1].mime_type, None);
    }

    #[tokio::test]
    async fn test_permission_posts_to_file_permissions() {
        let server = StubServer::start(vec![(200, r#"{"id": "anyoneWithLink"}"#)]).await;

        client_for(&server)
            .create_permission("pres-9", PermissionRole::Reader, PermissionType::Anyone)
            .await
            .unwrap();

        let requests = server.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].target, "/drive/v3/files/pres-9/permissions");
        assert_eq!(requests[0].json(), json!({"role": "reader", "type": "anyone"}));
    }

    #[tokio::test]
    async fn test_list_files_sends_page_size() {
        let server = StubServer::start(vec![(
            200,
            r#"{"files": [{"id": "1abc", "name": "Lyrics Prompter"}]}"#,
        )])
        .await;

        let files = client_for(&server).list_files(5).await.unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].id, "1abc");
        let requests = server.requests();
        assert_eq!(requests[0].method, "GET");
        assert!(requests[0].target.starts_with("/drive/v3/files?pageSize=5&fields="));
    }

    #[tokio::test]
    async fn test_delete_accepts_no_content() {
        let server = StubServer::start(vec![(204, "")]).await;

        client_for(&server).delete_file("probe-id").await.unwrap();

        let requests = server.requests();
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].target, "/drive/v3/files/probe-id");
    }

    #[tokio::test]
    async fn test_create_file_rejection_is_api_error() {
        let server = StubServer::start(vec![(
            400,
            r#"{"error": {"code": 400, "message": "Invalid mime type"}}"#,
        )])
        .await;

        let err = client_for(&server)
            .create_file("lyrics-slides-probe-1", "text/plain")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LyricsSlidesError::Api(ApiError::Status {
                service: "Drive",
                status: 400,
                ..
            })
        ));
        assert_eq!(
            server.requests()[0].json(),
            json!({"name": "lyrics-slides-probe-1", "mimeType": "text/plain"})
        );
    }
}
