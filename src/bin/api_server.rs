// src/bin/api_server.rs

use course_resolver::infra::{config, logging};
use course_resolver::{transport, CourseService};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init()?;

    // --- Service Initialization ---
    info!("Initializing CourseService...");
    let service = CourseService::from_env()?;

    // Optional: copy the bundled catalog into the document store so the secondary
    // source has data on a fresh database. Failures are logged; the server still starts.
    if config::seed_store_on_start() {
        match service.seed_store().await {
            Ok(report) if report.failed.is_empty() => {
                info!(written = report.written, "Document store seeded")
            }
            Ok(report) => warn!(
                written = report.written,
                failed = ?report.failed,
                "Document store partially seeded"
            ),
            Err(e) => error!(error = %e, "Could not seed document store (continuing)"),
        }
    }

    let app_state = transport::http::AppState {
        service: Arc::new(service),
    };
    info!("CourseService initialized successfully.");

    // --- API Server Initialization ---
    let bind_addr = config::bind_addr();
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("API server listening on http://{}", bind_addr);
    info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received (Ctrl+C); stopping.");
        }
    }

    Ok(())
}
