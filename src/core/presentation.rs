use tracing::{debug, error, info, warn};

use crate::core::google::drive::{DriveApi, PermissionRole, PermissionType};
use crate::core::google::slides::{
    AffineTransform, Alignment, CreateShapeRequest, CreateSlideRequest, DeleteObjectRequest,
    Dimension, InsertTextRequest, LayoutReference, OpaqueColor, OptionalColor, PageBackgroundFill,
    PageElementProperties, PageProperties, ParagraphStyle, Request, RgbColor, SlidesApi, Size,
    SolidFill, TextStyle, Unit, UpdatePagePropertiesRequest, UpdateParagraphStyleRequest,
    UpdateTextStyleRequest,
};
use crate::core::lyrics::SlideUnit;
use crate::error::{LyricsError, Result};

/// Object ID of the title slide every new presentation starts with.
pub const DEFAULT_SLIDE_ID: &str = "p";

const TEXT_BOX_WIDTH_PT: f64 = 600.0;
const TEXT_BOX_HEIGHT_PT: f64 = 300.0;
const TEXT_BOX_X_PT: f64 = 100.0;
const TEXT_BOX_Y_PT: f64 = 150.0;
const FONT_SIZE_PT: f64 = 48.0;

pub fn presentation_url(presentation_id: &str) -> String {
    format!("https://docs.google.com/presentation/d/{}/edit", presentation_id)
}

/// Every edit for the whole deck, in submission order.
///
/// Starts by deleting the default slide, then six requests per unit:
/// slide, text box, text, text style, paragraph style, background.
pub fn build_requests(units: &[SlideUnit]) -> Vec<Request> {
    let mut requests = Vec::with_capacity(1 + units.len() * 6);
    requests.push(Request::DeleteObject(DeleteObjectRequest {
        object_id: DEFAULT_SLIDE_ID.to_string(),
    }));

    for (index, unit) in units.iter().enumerate() {
        requests.extend(slide_requests(index, unit));
    }

    requests
}

fn slide_requests(index: usize, unit: &SlideUnit) -> [Request; 6] {
    let slide_id = format!("slide_{}", index);
    let text_box_id = format!("textbox_{}", index);

    [
        Request::CreateSlide(CreateSlideRequest {
            object_id: slide_id.clone(),
            slide_layout_reference: LayoutReference {
                predefined_layout: "BLANK".to_string(),
            },
        }),
        Request::CreateShape(CreateShapeRequest {
            object_id: text_box_id.clone(),
            shape_type: "TEXT_BOX".to_string(),
            element_properties: PageElementProperties {
                page_object_id: slide_id.clone(),
                size: Size {
                    height: Dimension::pt(TEXT_BOX_HEIGHT_PT),
                    width: Dimension::pt(TEXT_BOX_WIDTH_PT),
                },
                transform: AffineTransform {
                    scale_x: 1.0,
                    scale_y: 1.0,
                    translate_x: TEXT_BOX_X_PT,
                    translate_y: TEXT_BOX_Y_PT,
                    unit: Unit::Pt,
                },
            },
        }),
        Request::InsertText(InsertTextRequest {
            object_id: text_box_id.clone(),
            text: unit.text().to_string(),
        }),
        Request::UpdateTextStyle(UpdateTextStyleRequest {
            object_id: text_box_id.clone(),
            style: TextStyle {
                foreground_color: OptionalColor {
                    opaque_color: OpaqueColor {
                        rgb_color: RgbColor::WHITE,
                    },
                },
                font_size: Dimension::pt(FONT_SIZE_PT),
                bold: true,
            },
            fields: "foregroundColor,fontSize,bold".to_string(),
        }),
        Request::UpdateParagraphStyle(UpdateParagraphStyleRequest {
            object_id: text_box_id,
            style: ParagraphStyle {
                alignment: Alignment::Center,
            },
            fields: "alignment".to_string(),
        }),
        Request::UpdatePageProperties(UpdatePagePropertiesRequest {
            object_id: slide_id,
            page_properties: PageProperties {
                page_background_fill: PageBackgroundFill {
                    solid_fill: SolidFill {
                        color: OpaqueColor {
                            rgb_color: RgbColor::BLACK,
                        },
                    },
                },
            },
            fields: "pageBackgroundFill".to_string(),
        }),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishedPresentation {
    pub id: String,
    pub url: String,
    pub slide_count: usize,
    pub shared: bool,
}

/// Creates the deck, fills it in one batch and shares it.
pub struct PresentationBuilder<'a> {
    slides: &'a dyn SlidesApi,
    drive: &'a dyn DriveApi,
    cleanup_on_failure: bool,
    share: bool,
}

impl<'a> PresentationBuilder<'a> {
    pub fn new(slides: &'a dyn SlidesApi, drive: &'a dyn DriveApi) -> Self {
        Self {
            slides,
            drive,
            cleanup_on_failure: true,
            share: true,
        }
    }

    pub fn cleanup_on_failure(mut self, enabled: bool) -> Self {
        self.cleanup_on_failure = enabled;
        self
    }

    pub fn share(mut self, enabled: bool) -> Self {
        self.share = enabled;
        self
    }

    pub async fn publish(&self, title: &str, units: &[SlideUnit]) -> Result<PublishedPresentation> {
        if units.is_empty() {
            return Err(LyricsError::Empty.into());
        }

        let requests = build_requests(units);

        let id = self.slides.create_presentation(title).await?;
        info!("Presentation '{}' created with ID {}", title, id);

        debug!("Batch holds {} requests for {} slides", requests.len(), units.len());
        if let Err(batch_error) = self.slides.batch_update(&id, &requests).await {
            error!("Batch update failed for presentation {}: {}", id, batch_error);
            if self.cleanup_on_failure {
                self.discard(&id).await;
            } else {
                warn!("Leaving partially built presentation {} in place", id);
            }
            return Err(batch_error);
        }
        info!("{} slides created", units.len());

        if self.share {
            self.drive
                .create_permission(&id, PermissionRole::Reader, PermissionType::Anyone)
                .await?;
        }

        Ok(PublishedPresentation {
            url: presentation_url(&id),
            id,
            slide_count: units.len(),
            shared: self.share,
        })
    }

    async fn discard(&self, presentation_id: &str) {
        match self.drive.delete_file(presentation_id).await {
            Ok(()) => info!("Removed orphaned presentation {}", presentation_id),
            Err(e) => warn!(
                "Could not remove orphaned presentation {}: {}",
                presentation_id, e
            ),
        }
    }
}
