//! Test helper utilities for webserver integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use catalog::InquiryForm;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

use webserver::{AppContext, InquirySink, RealStaticFileServer, SiteConfig, WebServerState, router};

/// Static root with a stylesheet and an image, and a file outside the root
pub fn create_static_root() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let root = dir.path().join("static");
    fs::create_dir_all(root.join("img")).expect("failed to create static dirs");
    fs::write(root.join("site.css"), "body { margin: 0; }").expect("failed to write css");
    fs::write(root.join("img").join("cloves.png"), b"\x89PNG fake").expect("failed to write image");
    fs::write(dir.path().join("secret.txt"), "outside the static root").expect("failed to write secret");
    (dir, root)
}

/// Router over the real static server and the given sink
pub fn create_test_router<I: InquirySink + 'static>(sink: I, show_prices: bool) -> (Router, TempDir) {
    let (dir, root) = create_static_root();
    let config = SiteConfig {
        show_prices,
        ..SiteConfig::local(root.clone())
    };
    let context = AppContext::new(WebServerState::new(config), sink, RealStaticFileServer::new(root));
    (router(context), dir)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body should be JSON")
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.expect("router should respond");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");

    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).expect("valid request");
    send(router, request).await
}

pub async fn post_json(router: &Router, uri: &str, payload: &Value) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("valid request");
    send(router, request).await
}

pub async fn post_form(router: &Router, body: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri("/inquiry")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(router, request).await
}

/// Form that passes every validation rule
pub fn valid_form() -> InquiryForm {
    InquiryForm {
        company_name: "Nusantara Foods".to_string(),
        contact_name: "Dewi Lestari".to_string(),
        email: "dewi@nusantarafoods.com".to_string(),
        phone: "+62 21 555 0101".to_string(),
        business_type: "distributor".to_string(),
        order_volume: "large".to_string(),
        coffee_types: vec!["Pepper".to_string()],
        notes: None,
    }
}
