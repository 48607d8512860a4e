use crate::transport::http::handlers::common::{
    resolve_or_respond, serialization_error,
};
use crate::transport::http::types::{
    ApiResponse, AppState, CourseDetail, CourseSummary, CurriculumResponse,
};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::debug;

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Bundled course listing", body = ApiResponse)
    )
)]
pub async fn list_courses_handler(State(state): State<AppState>) -> impl IntoResponse {
    let courses: Vec<CourseSummary> = state
        .service
        .catalog()
        .list()
        .iter()
        .map(|r| CourseSummary::from(r.as_ref()))
        .collect();

    match serde_json::to_value(courses) {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(data),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => serialization_error(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/courses/{identifier}",
    params(
        ("identifier" = String, Path, description = "Course id or slug (e.g. shopify)")
    ),
    responses(
        (status = 200, description = "Course resolved", body = ApiResponse),
        (status = 404, description = "Course not found in any source", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn get_course_handler(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> impl IntoResponse {
    let (record, source) = match resolve_or_respond(&state, &identifier).await {
        Ok(found) => found,
        Err(resp) => return resp.into_response(),
    };
    debug!(identifier = identifier.as_str(), source = %source, "Serving course detail");

    let detail = match CourseDetail::new(&record, source) {
        Ok(d) => d,
        Err(e) => return serialization_error(e).into_response(),
    };
    let etag = format!("\"{}\"", detail.fingerprint);

    match serde_json::to_value(&detail) {
        Ok(data) => (
            StatusCode::OK,
            [(header::ETAG, etag)],
            Json(ApiResponse {
                success: true,
                data: Some(data),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => serialization_error(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/courses/{identifier}/curriculum",
    params(
        ("identifier" = String, Path, description = "Course id or slug")
    ),
    responses(
        (status = 200, description = "Curriculum view of the resolved course", body = ApiResponse),
        (status = 404, description = "Course not found in any source", body = ApiResponse)
    )
)]
pub async fn get_curriculum_handler(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> impl IntoResponse {
    let (record, source) = match resolve_or_respond(&state, &identifier).await {
        Ok(found) => found,
        Err(resp) => return resp.into_response(),
    };

    let body = CurriculumResponse::new(identifier.trim(), &record, source);
    match serde_json::to_value(body) {
        Ok(data) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(data),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => serialization_error(e).into_response(),
    }
}
