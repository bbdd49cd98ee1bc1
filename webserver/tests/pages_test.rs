//! Router-level tests for the HTML pages

mod helpers;

use axum::http::StatusCode;
use catalog::{CategoryFilter, SiteContent, filter_items};
use webserver::LoggingInquirySink;

use helpers::{create_test_router, get};

#[tokio::test]
async fn test_every_page_renders() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);

    for (path, heading) in [
        ("/", "Our Products"),
        ("/about", "Meet the Team"),
        ("/gallery", "Gallery"),
        ("/portfolio", "Our Portfolio"),
    ] {
        let response = get(&router, path).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.body.starts_with("<!DOCTYPE html>"), "{path}");
        assert!(response.body.contains(heading), "{path}");
        assert!(response.body.contains(r#"href="/portfolio""#), "{path}");
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);

    let response = get(&router, "/shop").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Page not found"));
    assert!(response.body.contains("/shop"));
}

#[tokio::test]
async fn test_gallery_filter_and_lightbox() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);

    // processing: 3, 6
    let response = get(&router, "/gallery?category=processing&view=3").await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.body;

    assert!(body.contains(r#"id="image-3""#));
    assert!(body.contains(r#"id="image-6""#));
    assert!(!body.contains(r#"id="image-1""#));
    assert!(body.contains(r#"class="lightbox""#));
    assert!(body.contains("1 / 2"));
    assert!(body.contains(r#"<a rel="prev" href="/gallery?category=processing&amp;view=6">"#));
    assert!(body.contains(r#"<a rel="next" href="/gallery?category=processing&amp;view=6">"#));
}

#[tokio::test]
async fn test_gallery_view_outside_filter_stays_closed() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);

    let response = get(&router, "/gallery?category=beans&view=3").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.body.contains(r#"class="lightbox""#));

    let response = get(&router, "/gallery?view=does-not-exist").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.body.contains(r#"class="lightbox""#));
}

#[tokio::test]
async fn test_home_product_filter() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);
    let content = SiteContent::default();

    let response = get(&router, "/?category=blend").await;
    assert_eq!(response.status, StatusCode::OK);

    let blends = filter_items(&content.products, &CategoryFilter::from("blend"));
    assert!(!blends.is_empty());
    for product in &content.products {
        let card = format!(r#"id="product-{}""#, product.id);
        assert_eq!(response.body.contains(&card), product.category == "blend", "{}", product.name);
    }
}

#[tokio::test]
async fn test_prices_follow_configuration() {
    let (hidden, _dir) = create_test_router(LoggingInquirySink::new(), false);
    let body = get(&hidden, "/").await.body;
    assert!(body.contains("For Price Contact Us"));
    assert!(!body.contains("5 kg: $"));

    let (shown, _dir) = create_test_router(LoggingInquirySink::new(), true);
    let body = get(&shown, "/").await.body;
    assert!(body.contains("5 kg: $"));
}

#[tokio::test]
async fn test_testimonial_slide_from_query() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);
    let content = SiteContent::default();
    let last = content.testimonials.len() - 1;

    let body = get(&router, &format!("/?slide={last}")).await.body;
    let active = &content.testimonials[last];
    assert!(body.contains(&format!(r#"id="testimonial-{}""#, active.id)));
    // next wraps to the first slide
    assert!(body.contains(r##"<a rel="next" href="/#testimonials">"##));

    // out of range falls back to the first slide
    let body = get(&router, "/?slide=99").await.body;
    assert!(body.contains(&format!(r#"id="testimonial-{}""#, content.testimonials[0].id)));
}

#[tokio::test]
async fn test_malformed_slide_shows_first_testimonial() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);
    let first = &SiteContent::default().testimonials[0];

    for path in ["/?slide=abc", "/?slide=-1", "/?slide="] {
        let response = get(&router, path).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.body.contains(&format!(r#"id="testimonial-{}""#, first.id)), "{path}");
    }
}

#[tokio::test]
async fn test_repeated_category_uses_last_value() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);

    let response = get(&router, "/gallery?category=farms&category=processing").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"id="image-3""#));
    assert!(!response.body.contains(r#"id="image-1""#));

    let response = get(&router, "/portfolio?category=quality&category=all").await;
    assert_eq!(response.status, StatusCode::OK);
    for project in &SiteContent::default().projects {
        assert!(response.body.contains(&format!(r#"id="project-{}""#, project.id)));
    }
}

#[tokio::test]
async fn test_portfolio_filter() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);
    let content = SiteContent::default();

    let body = get(&router, "/portfolio?category=supply-chain").await.body;
    for project in &content.projects {
        let card = format!(r#"id="project-{}""#, project.id);
        assert_eq!(body.contains(&card), project.category == "supply-chain");
    }
}
