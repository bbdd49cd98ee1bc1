//! Inquiry submission through the JSON API and the HTML form

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use webserver::traits::MockInquirySink;
use webserver::{InquiryReceipt, LoggingInquirySink, WebServerError};

use helpers::{create_test_router, get, post_form, post_json, valid_form};

fn accepting_sink(times: usize) -> MockInquirySink {
    let mut sink = MockInquirySink::new();
    sink.expect_submit()
        .times(times)
        .returning(|inquiry| Ok(InquiryReceipt::new(inquiry)));
    sink
}

#[tokio::test]
async fn test_api_accepts_and_echoes_inquiry() {
    let (router, _dir) = create_test_router(accepting_sink(1), false);
    let payload = serde_json::to_value(valid_form()).expect("form serializes");

    let response = post_json(&router, "/api/inquiry", &payload).await;
    assert_eq!(response.status, StatusCode::OK);

    let json = response.json();
    assert_eq!(json["status"], "received");
    assert_eq!(json["inquiry"], payload);
    assert!(json["reference"].is_string());
    assert!(json["received_at"].is_string());
}

#[tokio::test]
async fn test_api_rejects_empty_company_without_submitting() {
    let mut sink = MockInquirySink::new();
    sink.expect_submit().never();
    let (router, _dir) = create_test_router(sink, false);

    let mut payload = serde_json::to_value(valid_form()).expect("form serializes");
    payload["companyName"] = json!("");

    let response = post_json(&router, "/api/inquiry", &payload).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json();
    assert_eq!(json["status"], "invalid");
    assert_eq!(
        json["errors"],
        json!([{ "field": "companyName", "message": "Company name is required" }])
    );
}

#[tokio::test]
async fn test_api_reports_every_failing_field_in_order() {
    let mut sink = MockInquirySink::new();
    sink.expect_submit().never();
    let (router, _dir) = create_test_router(sink, false);

    let response = post_json(&router, "/api/inquiry", &json!({ "email": "not-an-email" })).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let fields: Vec<_> = response.json()["errors"]
        .as_array()
        .expect("errors")
        .iter()
        .map(|e| e["field"].as_str().expect("field").to_string())
        .collect();
    assert_eq!(
        fields,
        vec![
            "companyName",
            "contactName",
            "email",
            "phone",
            "businessType",
            "orderVolume",
            "coffeeTypes"
        ]
    );
}

#[tokio::test]
async fn test_sink_failure_is_server_error() {
    let mut sink = MockInquirySink::new();
    sink.expect_submit()
        .times(1)
        .returning(|_| Err(WebServerError::InquiryDelivery("mailbox unavailable".to_string())));
    let (router, _dir) = create_test_router(sink, false);

    let payload = serde_json::to_value(valid_form()).expect("form serializes");
    let response = post_json(&router, "/api/inquiry", &payload).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["status"], "error");
}

#[tokio::test]
async fn test_form_post_collects_repeated_products() {
    let mut sink = MockInquirySink::new();
    sink.expect_submit()
        .withf(|inquiry| inquiry.coffee_types == ["Pepper", "Cloves"] && inquiry.notes.as_deref() == Some("FOB Jakarta"))
        .times(1)
        .returning(|inquiry| Ok(InquiryReceipt::new(inquiry)));
    let (router, _dir) = create_test_router(sink, false);

    let body = "companyName=Nusantara+Foods&contactName=Dewi+Lestari&email=dewi%40nusantarafoods.com\
                &phone=%2B62+21+555+0101&businessType=distributor&orderVolume=large\
                &coffeeTypes=Pepper&coffeeTypes=Cloves&notes=FOB+Jakarta";
    let response = post_form(&router, body).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Thank you, Dewi Lestari!"));
    // form is reset after a successful submission
    assert!(!response.body.contains(r#"value="Nusantara Foods""#));
    assert!(!response.body.contains(r#"value="Pepper" checked"#));
}

#[tokio::test]
async fn test_form_post_shows_inline_errors_and_keeps_values() {
    let mut sink = MockInquirySink::new();
    sink.expect_submit().never();
    let (router, _dir) = create_test_router(sink, false);

    let body = "companyName=&contactName=Dewi+Lestari&email=dewi%40nusantarafoods.com\
                &phone=12345&businessType=cafe&orderVolume=small&coffeeTypes=Palm-Sugar";
    let response = post_form(&router, body).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains(r#"<p class="error" id="companyName-error">Company name is required</p>"#));
    assert!(!response.body.contains("contactName-error"));
    assert!(response.body.contains(r#"value="Dewi Lestari""#));
    assert!(response.body.contains(r#"<option value="cafe" selected>"#));
    assert!(response.body.contains(r#"value="Palm-Sugar" checked"#));
}

#[tokio::test]
async fn test_health_counts_accepted_inquiries() {
    let (router, _dir) = create_test_router(LoggingInquirySink::new(), false);
    let payload = serde_json::to_value(valid_form()).expect("form serializes");

    post_json(&router, "/api/inquiry", &payload).await;
    post_json(&router, "/api/inquiry", &json!({ "companyName": "" })).await;

    let json = get(&router, "/health").await.json();
    assert_eq!(json["inquiries_received"], 1);
}
