use crate::transport::http::handlers::{courses, health};
use crate::transport::http::types::{
    ApiResponse, CourseDetail, CourseNotFound, CourseSummary, CurriculumResponse,
    DisplayAttributes,
};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        courses::list_courses_handler,
        courses::get_course_handler,
        courses::get_curriculum_handler
    ),
    components(schemas(
        ApiResponse,
        CourseSummary,
        CourseDetail,
        DisplayAttributes,
        CurriculumResponse,
        CourseNotFound
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/courses", get(courses::list_courses_handler))
        .route("/api/courses/:identifier", get(courses::get_course_handler))
        .route(
            "/api/courses/:identifier/curriculum",
            get(courses::get_curriculum_handler),
        )
        .with_state(app_state)
}
