//! Router-level tests for the JSON API, static assets and health check

mod helpers;

use axum::http::{StatusCode, header};
use catalog::SiteContent;
use webserver::LoggingInquirySink;

use helpers::{create_test_router, get};

fn ids(items: &serde_json::Value) -> Vec<String> {
    items
        .as_array()
        .expect("items should be an array")
        .iter()
        .map(|item| item["id"].as_str().expect("id").to_string())
        .collect()
}

#[tokio::test]
async fn test_gallery_list_filters_by_category() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);

    let response = get(&router, "/api/gallery?category=processing").await;
    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["category"], "processing");
    assert_eq!(ids(&json["items"]), vec!["3", "6"]);
    assert_eq!(json["categories"][0]["id"], "all");

    let json = get(&router, "/api/gallery?category=all").await.json();
    assert_eq!(json["category"], "all");
    assert_eq!(json["items"].as_array().map(Vec::len), Some(SiteContent::default().gallery.len()));

    let response = get(&router, "/api/gallery?category=farms&category=processing").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["category"], "processing");
}

#[tokio::test]
async fn test_viewer_navigation_wraps() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);

    let json = get(&router, "/api/gallery/viewer?category=farms&item=7&step=next").await.json();
    assert_eq!(json["item"]["id"], "1");
    assert_eq!(json["index"], 0);
    assert_eq!(json["position"], 1);
    assert_eq!(json["total"], 3);
    assert_eq!(json["prev_id"], "7");
    assert_eq!(json["next_id"], "2");

    let json = get(&router, "/api/gallery/viewer?category=farms&item=1&step=prev").await.json();
    assert_eq!(json["item"]["id"], "7");
    assert_eq!(json["index"], 2);

    let json = get(&router, "/api/gallery/viewer?item=5").await.json();
    assert_eq!(json["item"]["id"], "5");
    assert_eq!(json["index"], 4);
    assert_eq!(json["total"], 9);
}

#[tokio::test]
async fn test_viewer_item_outside_filter_is_not_found() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);

    let response = get(&router, "/api/gallery/viewer?category=beans&item=1").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["status"], "error");
}

#[tokio::test]
async fn test_products_hide_prices_unless_enabled() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);
    let json = get(&router, "/api/products").await.json();
    let items = json["items"].as_array().expect("items");
    assert!(!items.is_empty());
    assert!(items.iter().all(|item| item.get("price").is_none()));

    let (router, _dir) = create_test_router(LoggingInquirySink::new(), true);
    let json = get(&router, "/api/products?category=blend").await.json();
    let items = json["items"].as_array().expect("items");
    assert!(!items.is_empty());
    assert!(items.iter().all(|item| item["price"]["kg5"].is_u64()));
    assert!(items.iter().all(|item| item["category"] == "blend"));
}

#[tokio::test]
async fn test_portfolio_and_testimonials() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);
    let content = SiteContent::default();

    let json = get(&router, "/api/portfolio?category=quality").await.json();
    let expected: Vec<_> = content
        .projects
        .iter()
        .filter(|p| p.category == "quality")
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(ids(&json["items"]), expected);

    let json = get(&router, "/api/testimonials").await.json();
    assert_eq!(json.as_array().map(Vec::len), Some(content.testimonials.len()));
}

#[tokio::test]
async fn test_health() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);

    let response = get(&router, "/health").await;
    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["inquiries_received"], 0);
}

#[tokio::test]
async fn test_static_assets() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);

    let response = get(&router, "/static/site.css").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[header::CONTENT_TYPE], "text/css");
    assert_eq!(response.headers[header::CACHE_CONTROL], "public, max-age=3600");
    assert_eq!(response.body, "body { margin: 0; }");

    let response = get(&router, "/static/img/cloves.png").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[header::CONTENT_TYPE], "image/png");

    let response = get(&router, "/static/missing.png").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = get(&router, "/static/../secret.txt").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
