use std::sync::Arc;

use axum_test::TestServer;
use krado_ui::config::{GalleryConfig, GalleryOptions, ServerConfig};
use krado_ui::{AppState, STYLESHEET, server};

fn test_server(title: &str) -> TestServer {
    let config = GalleryConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        gallery: GalleryOptions {
            title: title.to_string(),
        },
    };
    let state = AppState {
        config: Arc::new(config),
    };
    TestServer::new(server::router(state)).expect("Failed to build test server")
}

#[tokio::test]
async fn test_gallery_page_renders_components() {
    let server = test_server("Component Gallery");

    let response = server.get("/").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("<title>Component Gallery</title>"));
    assert!(body.contains("krado-button--danger"));
    assert!(body.contains("krado-button--loading"));
    assert!(body.contains("krado-input--error"));
    assert!(body.contains("krado-input-helper-text--success"));
    assert!(body.contains("krado-input-label--required"));
}

#[tokio::test]
async fn test_stylesheet_is_served_as_css() {
    let server = test_server("Krado UI");

    let response = server.get("/krado-ui.css").await;
    response.assert_status_ok();

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/css"));
    assert_eq!(response.text(), STYLESHEET);
}

#[tokio::test]
async fn test_health() {
    let server = test_server("Krado UI");
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("ok");
}

#[test]
fn test_stylesheet_covers_class_contract() {
    for class in [
        ".krado-button",
        ".krado-button--secondary",
        ".krado-button--outline",
        ".krado-button--ghost",
        ".krado-button--danger",
        ".krado-button--success",
        ".krado-button--sm",
        ".krado-button--lg",
        ".krado-button--full-width",
        ".krado-button--loading",
        ".krado-input-wrapper",
        ".krado-input-label",
        ".krado-input-label--required",
        ".krado-input",
        ".krado-input--error",
        ".krado-input--success",
        ".krado-input--sm",
        ".krado-input--lg",
        ".krado-input-helper-text",
        ".krado-input-helper-text--error",
        ".krado-input-helper-text--success",
    ] {
        assert!(STYLESHEET.contains(class), "missing {class}");
    }
}
