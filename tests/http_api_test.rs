//! HTTP surface: listing, detail (with ETag), not-found view, curriculum and health.

mod support;

use course_resolver::{fingerprint, transport, CourseService, CourseSource, SourceError, StaticCatalog};
use serde_json::Value;
use std::sync::Arc;
use support::{course, nested_curriculum, FakeSource};

async fn spawn_server() -> anyhow::Result<String> {
    let mut bundled = course("static-shopify", Some("shopify"), "Shopify (bundled)");
    bundled.lectures = nested_curriculum();
    let catalog = Arc::new(StaticCatalog::new(vec![
        bundled,
        course("static-excel", Some("excel"), "Excel (bundled)"),
    ]));

    let remote: Arc<dyn CourseSource> = Arc::new(FakeSource::with_records(
        "remote",
        vec![course("web-dev-101", None, "Web Development")],
    ));
    let secondary: Arc<dyn CourseSource> = Arc::new(FakeSource::failing(
        "secondary",
        SourceError::Transport("store offline".into()),
    ));

    let state = transport::http::AppState {
        service: Arc::new(CourseService::new(catalog, remote, secondary)),
    };
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://{}", addr))
}

#[tokio::test]
async fn lists_bundled_courses() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let body: Value = reqwest::get(format!("{}/api/courses", base)).await?.json().await?;

    assert!(body["success"].as_bool().unwrap_or(false));
    let courses = body["data"].as_array().expect("array of courses");
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0]["slug"], "shopify");
    assert_eq!(courses[0]["lesson_count"], 3);
    assert_eq!(courses[1]["price"], "Contact us");
    Ok(())
}

#[tokio::test]
async fn course_detail_carries_source_defaults_and_etag() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let response = reqwest::get(format!("{}/api/courses/web-dev-101", base)).await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let etag = response
        .headers()
        .get(reqwest::header::ETAG)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("ETag header");
    let body: Value = response.json().await?;
    let data = &body["data"];

    assert_eq!(data["record"]["title"], "Web Development");
    assert_eq!(data["source"], "remote");
    assert_eq!(data["display"]["language"], "English");
    assert_eq!(data["display"]["instructor"], "Training Team");

    let expected = fingerprint(&course("web-dev-101", None, "Web Development"))?;
    assert_eq!(data["fingerprint"], expected.as_str());
    assert_eq!(etag, format!("\"{}\"", expected));
    Ok(())
}

#[tokio::test]
async fn unknown_course_renders_not_found_view() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let response = reqwest::get(format!("{}/api/courses/does-not-exist", base)).await?;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let body: Value = response.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Course not found");
    assert_eq!(body["data"]["identifier"], "does-not-exist");
    assert_eq!(body["data"]["courses_url"], "/api/courses");
    Ok(())
}

#[tokio::test]
async fn curriculum_of_static_fallback() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let body: Value = reqwest::get(format!("{}/api/courses/shopify/curriculum", base))
        .await?
        .json()
        .await?;
    let data = &body["data"];

    assert_eq!(data["source"], "static");
    assert_eq!(data["lesson_count"], 3);
    assert_eq!(data["playable_count"], 1);

    let section = &data["curriculum"]["entries"][0];
    assert_eq!(section["kind"], "section");
    assert_eq!(section["lesson_count"], 3);
    assert_eq!(data["curriculum"]["expanded"]["setup"], false);
    Ok(())
}

#[tokio::test]
async fn health_without_store() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let response = reqwest::get(format!("{}/health", base)).await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await?;
    assert_eq!(body["data"]["store"], "not_configured");
    assert_eq!(body["data"]["bundled_courses"], 2);
    Ok(())
}
