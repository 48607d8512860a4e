use crate::domain::course::CourseRecord;
use crate::domain::resolve::{Resolution, SourceKind};
use crate::transport::http::types::{ApiResponse, AppState, CourseNotFound};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub const COURSES_URL: &str = "/api/courses";

pub fn error_response(
    status: StatusCode,
    error: impl Into<String>,
    data: Option<JsonValue>,
) -> (StatusCode, Json<ApiResponse>) {
    (
        status,
        Json(ApiResponse {
            success: false,
            data,
            error: Some(error.into()),
        }),
    )
}

pub fn not_found_response(identifier: &str) -> (StatusCode, Json<ApiResponse>) {
    let body = CourseNotFound {
        identifier: identifier.to_string(),
        courses_url: COURSES_URL.to_string(),
    };
    error_response(
        StatusCode::NOT_FOUND,
        "Course not found",
        serde_json::to_value(body).ok(),
    )
}

pub fn serialization_error(e: serde_json::Error) -> (StatusCode, Json<ApiResponse>) {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Failed to serialize response: {}", e),
        None,
    )
}

/// Runs one resolution cycle for a request, mapping the non-found outcomes to responses.
pub async fn resolve_or_respond(
    state: &AppState,
    identifier: &str,
) -> Result<(Arc<CourseRecord>, SourceKind), (StatusCode, Json<ApiResponse>)> {
    match state.service.resolve(identifier).await {
        Resolution::Found { record, source } => Ok((record, source)),
        Resolution::NotFound => Err(not_found_response(identifier.trim())),
        Resolution::Superseded => Err(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Course resolution was superseded",
            None,
        )),
    }
}
