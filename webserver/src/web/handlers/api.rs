//! JSON API handlers
//!
//! Read-only views of the catalog plus inquiry submission

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use catalog::{CatalogError, CategoryMenu, Direction, GalleryImage, InquiryForm, Lightbox, Project, Testimonial, filter_items};

use super::{Submission, submit_inquiry as submit};
use crate::error::WebServerResult;
use crate::state::AppContext;
use crate::traits::{InquirySink, StaticFileServer};
use crate::types::{
    HealthResponse, InquiryAccepted, InquiryRejected, ListQuery, ListResponse, PublicProduct, ViewerQuery,
    ViewerResponse,
};

fn list_response<T>(query: ListQuery, menu: &CategoryMenu, items: Vec<T>) -> Json<ListResponse<T>> {
    Json(ListResponse {
        category: query.category,
        categories: menu.options.clone(),
        items,
    })
}

pub async fn gallery<I, S>(
    State(context): State<AppContext<I, S>>,
    Query(query): Query<ListQuery>,
) -> Json<ListResponse<GalleryImage>>
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    let content = context.content();
    let items = filter_items(&content.gallery, &query.category)
        .into_iter()
        .cloned()
        .collect();
    list_response(query, &content.gallery_menu, items)
}

/// Open `item` within the filtered gallery, then take at most one step
pub async fn gallery_viewer<I, S>(
    State(context): State<AppContext<I, S>>,
    Query(query): Query<ViewerQuery>,
) -> WebServerResult<Json<ViewerResponse>>
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    let content = context.content();
    let mut lightbox = Lightbox::new(filter_items(&content.gallery, &query.category));
    lightbox.open(&query.item)?;
    if let Some(direction) = query.step {
        lightbox.navigate(direction);
    }

    let not_in_view = || CatalogError::ItemNotInView {
        item_id: query.item.clone(),
    };
    let item = lightbox.current().ok_or_else(not_in_view)?;
    let index = lightbox.state().index().ok_or_else(not_in_view)?;
    let (position, total) = lightbox.position().ok_or_else(not_in_view)?;
    let prev = lightbox.peek(Direction::Prev).ok_or_else(not_in_view)?;
    let next = lightbox.peek(Direction::Next).ok_or_else(not_in_view)?;

    Ok(Json(ViewerResponse {
        item: item.clone(),
        index,
        position,
        total,
        prev_id: prev.id.clone(),
        next_id: next.id.clone(),
    }))
}

pub async fn portfolio<I, S>(
    State(context): State<AppContext<I, S>>,
    Query(query): Query<ListQuery>,
) -> Json<ListResponse<Project>>
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    let content = context.content();
    let items = filter_items(&content.projects, &query.category)
        .into_iter()
        .cloned()
        .collect();
    list_response(query, &content.portfolio_menu, items)
}

pub async fn products<I, S>(
    State(context): State<AppContext<I, S>>,
    Query(query): Query<ListQuery>,
) -> Json<ListResponse<PublicProduct>>
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    let content = context.content();
    let show_prices = context.state.show_prices();
    let items = filter_items(&content.products, &query.category)
        .into_iter()
        .map(|product| PublicProduct::new(product, show_prices))
        .collect();
    list_response(query, &content.product_menu, items)
}

pub async fn testimonials<I, S>(State(context): State<AppContext<I, S>>) -> Json<Vec<Testimonial>>
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    Json(context.content().testimonials.clone())
}

/// JSON inquiry submission: 200 with the receipt, 422 with field errors
pub async fn submit_inquiry<I, S>(
    State(context): State<AppContext<I, S>>,
    Json(form): Json<InquiryForm>,
) -> WebServerResult<Response>
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    let response = match submit(context.inquiry_sink.as_ref(), &form).await? {
        Submission::Accepted(receipt) => (StatusCode::OK, Json(InquiryAccepted::from(receipt))).into_response(),
        Submission::Rejected(errors) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(InquiryRejected::from(errors))).into_response()
        }
    };
    Ok(response)
}

/// Health check endpoint
pub async fn health<I, S>(State(context): State<AppContext<I, S>>) -> Json<HealthResponse>
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: context.state.get_uptime_seconds(),
        inquiries_received: context.inquiry_sink.received_count().await,
    })
}
