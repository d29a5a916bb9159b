use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{check_status, TokenProvider};
use crate::error::{ApiError, NetworkError, Result};

const SERVICE: &str = "Slides";

/// Slides operations the presentation builder depends on.
#[async_trait]
pub trait SlidesApi: Send + Sync {
    /// Create an empty presentation and return its ID.
    async fn create_presentation(&self, title: &str) -> Result<String>;

    /// Apply `requests` in order as one batched mutation.
    async fn batch_update(&self, presentation_id: &str, requests: &[Request]) -> Result<()>;
}

/// One edit in a `presentations.batchUpdate` call.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    DeleteObject(DeleteObjectRequest),
    CreateSlide(CreateSlideRequest),
    CreateShape(CreateShapeRequest),
    InsertText(InsertTextRequest),
    UpdateTextStyle(UpdateTextStyleRequest),
    UpdateParagraphStyle(UpdateParagraphStyleRequest),
    UpdatePageProperties(UpdatePagePropertiesRequest),
}

impl Request {
    pub fn kind(&self) -> &'static str {
        match self {
            Request::DeleteObject(_) => "deleteObject",
            Request::CreateSlide(_) => "createSlide",
            Request::CreateShape(_) => "createShape",
            Request::InsertText(_) => "insertText",
            Request::UpdateTextStyle(_) => "updateTextStyle",
            Request::UpdateParagraphStyle(_) => "updateParagraphStyle",
            Request::UpdatePageProperties(_) => "updatePageProperties",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteObjectRequest {
    pub object_id: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlideRequest {
    pub object_id: String,
    pub slide_layout_reference: LayoutReference,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReference {
    pub predefined_layout: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateShapeRequest {
    pub object_id: String,
    pub shape_type: String,
    pub element_properties: PageElementProperties,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageElementProperties {
    pub page_object_id: String,
    pub size: Size,
    pub transform: AffineTransform,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Size {
    pub height: Dimension,
    pub width: Dimension,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Dimension {
    pub fn pt(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: Unit::Pt,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    Pt,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AffineTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub unit: Unit,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertTextRequest {
    pub object_id: String,
    pub text: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyleRequest {
    pub object_id: String,
    pub style: TextStyle,
    pub fields: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub foreground_color: OptionalColor,
    pub font_size: Dimension,
    pub bold: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionalColor {
    pub opaque_color: OpaqueColor,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpaqueColor {
    pub rgb_color: RgbColor,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };
    pub const BLACK: RgbColor = RgbColor {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParagraphStyleRequest {
    pub object_id: String,
    pub style: ParagraphStyle,
    pub fields: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub alignment: Alignment,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    Center,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePagePropertiesRequest {
    pub object_id: String,
    pub page_properties: PageProperties,
    pub fields: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageProperties {
    pub page_background_fill: PageBackgroundFill,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageBackgroundFill {
    pub solid_fill: SolidFill,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SolidFill {
    pub color: OpaqueColor,
}

#[derive(Serialize)]
struct CreatePresentationBody<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct BatchUpdateBody<'a> {
    requests: &'a [Request],
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PresentationResponse {
    presentation_id: Option<String>,
}

#[derive(Deserialize, Debug)]
struct BatchUpdateResponse {
    #[serde(default)]
    replies: Vec<serde_json::Value>,
}

/// Google Slides REST client
#[derive(Clone)]
pub struct SlidesClient {
    client: reqwest::Client,
    base_url: String,
    auth: Arc<dyn TokenProvider>,
}

impl SlidesClient {
    pub fn new(client: reqwest::Client, base_url: &str, auth: Arc<dyn TokenProvider>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    fn presentations_url(&self) -> String {
        format!("{}/v1/presentations", self.base_url)
    }
}

#[async_trait]
impl SlidesApi for SlidesClient {
    async fn create_presentation(&self, title: &str) -> Result<String> {
        let token = self.auth.access_token().await?;
        debug!("Creating presentation '{}'", title);

        let response = self
            .client
            .post(self.presentations_url())
            .bearer_auth(token)
            .json(&CreatePresentationBody { title })
            .send()
            .await?;

        let response = check_status(SERVICE, response).await?;
        let created: PresentationResponse = response.json().await.map_err(|e| {
            NetworkError::InvalidResponse {
                reason: format!("presentations.create: {}", e),
            }
        })?;

        let id = created.presentation_id.ok_or(ApiError::MissingField {
            service: SERVICE,
            field: "presentationId",
        })?;

        info!("Created presentation {}", id);
        Ok(id)
    }

    async fn batch_update(&self, presentation_id: &str, requests: &[Request]) -> Result<()> {
        if requests.is_empty() {
            return Ok(());
        }

        let token = self.auth.access_token().await?;
        let new_slides = requests
            .iter()
            .filter(|request| request.kind() == "createSlide")
            .count();
        debug!(
            "Submitting {} requests ({} new slides) to presentation {}",
            requests.len(),
            new_slides,
            presentation_id
        );

        let url = format!("{}/{}:batchUpdate", self.presentations_url(), presentation_id);
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&BatchUpdateBody { requests })
            .send()
            .await?;

        let response = check_status(SERVICE, response).await?;
        let applied: BatchUpdateResponse = response.json().await.map_err(|e| {
            NetworkError::InvalidResponse {
                reason: format!("presentations.batchUpdate: {}", e),
            }
        })?;

        debug!("Batch update returned {} replies", applied.replies.len());
        Ok(())
    }
}
