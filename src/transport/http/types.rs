use crate::app::CourseService;
use crate::crypto::hashing::fingerprint;
use crate::domain::course::CourseRecord;
use crate::domain::curriculum::CurriculumView;
use crate::domain::resolve::SourceKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CourseService>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One row of the course listing.
#[derive(Serialize, Debug, ToSchema)]
pub struct CourseSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: String,
    pub price: String,
    pub image: String,
    pub lesson_count: usize,
}

impl From<&CourseRecord> for CourseSummary {
    fn from(record: &CourseRecord) -> Self {
        Self {
            id: record.id.clone(),
            slug: record.slug.clone(),
            title: record.title.clone(),
            excerpt: record.excerpt.clone(),
            price: record.display_price().to_string(),
            image: record.display_image().to_string(),
            lesson_count: record.total_lessons(),
        }
    }
}

/// Display attributes with defaults applied.
#[derive(Serialize, Debug, ToSchema)]
pub struct DisplayAttributes {
    pub price: String,
    pub rating: f32,
    pub rating_count: u32,
    pub duration: String,
    pub language: String,
    pub instructor: String,
    pub image: String,
}

impl From<&CourseRecord> for DisplayAttributes {
    fn from(record: &CourseRecord) -> Self {
        Self {
            price: record.display_price().to_string(),
            rating: record.display_rating(),
            rating_count: record.display_rating_count(),
            duration: record.display_duration().to_string(),
            language: record.display_language().to_string(),
            instructor: record.display_instructor().to_string(),
            image: record.display_image().to_string(),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CourseDetail {
    /// The canonical record exactly as resolved.
    #[schema(value_type = Object)]
    pub record: CourseRecord,
    #[schema(value_type = String)]
    pub source: SourceKind,
    /// Hex SHA-256 of the canonical record; also sent as the `ETag` header.
    pub fingerprint: String,
    pub description: Vec<String>,
    pub display: DisplayAttributes,
    pub lesson_count: usize,
    #[schema(value_type = String)]
    pub resolved_at: DateTime<Utc>,
}

impl CourseDetail {
    pub fn new(record: &CourseRecord, source: SourceKind) -> Result<Self, serde_json::Error> {
        Ok(Self {
            fingerprint: fingerprint(record)?,
            description: record.description_paragraphs(),
            display: record.into(),
            lesson_count: record.total_lessons(),
            resolved_at: Utc::now(),
            source,
            record: record.clone(),
        })
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CurriculumResponse {
    pub identifier: String,
    #[schema(value_type = String)]
    pub source: SourceKind,
    pub lesson_count: usize,
    pub playable_count: usize,
    #[schema(value_type = Object)]
    pub curriculum: CurriculumView,
}

impl CurriculumResponse {
    pub fn new(identifier: &str, record: &CourseRecord, source: SourceKind) -> Self {
        let curriculum = CurriculumView::from_record(record);
        Self {
            identifier: identifier.to_string(),
            source,
            lesson_count: curriculum.lesson_count(),
            playable_count: curriculum.playable_lectures().count(),
            curriculum,
        }
    }
}

/// Body of the "course not found" view.
#[derive(Serialize, Debug, ToSchema)]
pub struct CourseNotFound {
    pub identifier: String,
    /// Where to send the user back to.
    pub courses_url: String,
}
