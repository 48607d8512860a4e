use crate::app::StoreHealth;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (store reachable or not configured)", body = ApiResponse),
        (status = 503, description = "Configured document store is unreachable", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let courses = state.service.catalog().len();

    match state.service.store_health().await {
        StoreHealth::Reachable | StoreHealth::NotConfigured => {
            let store = if state.service.store().is_some() {
                "reachable"
            } else {
                "not_configured"
            };
            (
                StatusCode::OK,
                Json(ApiResponse {
                    success: true,
                    data: Some(serde_json::json!({
                        "status": "ok",
                        "store": store,
                        "bundled_courses": courses
                    })),
                    error: None,
                }),
            )
                .into_response()
        }
        StoreHealth::Unreachable(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                success: false,
                data: Some(serde_json::json!({
                    "status": "degraded",
                    "store": "unreachable",
                    "bundled_courses": courses
                })),
                error: Some(format!("Document store ping failed: {}", e)),
            }),
        )
            .into_response(),
    }
}
