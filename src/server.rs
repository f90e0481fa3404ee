use axum::{
    Router,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::GalleryConfig;
use crate::{AppState, STYLESHEET, STYLESHEET_FILE_NAME, gallery};

/// Build the gallery router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(gallery_handler))
        .route(&format!("/{STYLESHEET_FILE_NAME}"), get(stylesheet_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gallery server with the provided configuration.
pub async fn start_server(config: Arc<GalleryConfig>) -> anyhow::Result<()> {
    let address = config.server.bind_address();
    let app = router(AppState {
        config: Arc::clone(&config),
    });

    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        name: "gallery.server.started",
        address = %format!("http://{address}"),
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

async fn gallery_handler(State(state): State<AppState>) -> Html<String> {
    Html(gallery::render_page(&state.config.gallery.title))
}

async fn stylesheet_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

async fn health_handler() -> &'static str {
    "ok"
}
