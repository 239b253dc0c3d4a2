use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use super::*;

fn bundled() -> ServerConfig {
    let site_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site");
    ServerConfig { port: 0, pkg_dir: site_dir.join("pkg"), site_dir }
}

async fn get_status(uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app(&bundled()).oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_is_ok() {
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let response = app(&bundled()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
}

#[tokio::test]
async fn root_serves_page_shell() {
    assert_eq!(get_status("/").await, StatusCode::OK);
    assert_eq!(get_status("/style.css").await, StatusCode::OK);
}

#[tokio::test]
async fn missing_files_are_not_found() {
    assert_eq!(get_status("/Purchase_Success%20/missing.json").await, StatusCode::NOT_FOUND);
    assert_eq!(get_status("/pkg/missing.wasm").await, StatusCode::NOT_FOUND);
}
