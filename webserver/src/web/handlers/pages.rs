//! HTML page handlers
//!
//! Page state comes from the query string only; each request rebuilds it
//! with the pure transitions of the catalog crate.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, Uri},
};
use catalog::{Carousel, CategoryFilter, Component, GalleryView, InquiryForm, site_debug};
use maud::Markup;
use url::form_urlencoded;

use super::{Submission, submit_inquiry as submit};
use crate::error::WebServerResult;
use crate::state::AppContext;
use crate::traits::{InquirySink, StaticFileServer};
use crate::types::{GalleryQuery, HomeQuery, ListQuery};
use crate::web::views::{self, home::HomeView, inquiry_form::InquiryPanel};

fn render_home<I, S>(context: &AppContext<I, S>, filter: &CategoryFilter, slide: usize, inquiry: InquiryPanel<'_>) -> Markup
where
    I: InquirySink,
    S: StaticFileServer,
{
    let content = context.content();
    let view = HomeView {
        content,
        filter,
        carousel: Carousel::at(content.testimonials.len(), slide),
        show_prices: context.state.show_prices(),
        inquiry,
    };
    views::home::render(&view)
}

pub async fn home<I, S>(State(context): State<AppContext<I, S>>, Query(query): Query<HomeQuery>) -> Markup
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    let form = InquiryForm::default();
    render_home(
        &context,
        &query.category,
        query.slide.unwrap_or_default(),
        InquiryPanel::blank(&form),
    )
}

pub async fn about<I, S>(State(context): State<AppContext<I, S>>) -> Markup
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    views::about::render(context.content())
}

pub async fn gallery<I, S>(State(context): State<AppContext<I, S>>, Query(query): Query<GalleryQuery>) -> Markup
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    let content = context.content();
    let mut view = GalleryView::new();
    view.select_category(query.category);

    if let Some(item_id) = query.view.as_deref() {
        if let Err(e) = view.open(&content.gallery, item_id) {
            site_debug!(Component::Pages, "🖼️ Lightbox stays closed: {}", e);
        }
    }

    views::gallery::render(content, &view)
}

pub async fn portfolio<I, S>(State(context): State<AppContext<I, S>>, Query(query): Query<ListQuery>) -> Markup
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    views::portfolio::render(context.content(), &query.category)
}

/// Form post from the contact section; re-renders the home page
pub async fn submit_inquiry<I, S>(State(context): State<AppContext<I, S>>, body: Bytes) -> WebServerResult<(StatusCode, Markup)>
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    let form = InquiryForm::from_pairs(form_urlencoded::parse(&body));
    let filter = CategoryFilter::All;

    let page = match submit(context.inquiry_sink.as_ref(), &form).await? {
        Submission::Accepted(receipt) => {
            let reset = InquiryForm::default();
            let page = render_home(&context, &filter, 0, InquiryPanel::accepted(&reset, &receipt));
            (StatusCode::OK, page)
        }
        Submission::Rejected(errors) => {
            let page = render_home(&context, &filter, 0, InquiryPanel::rejected(&form, &errors));
            (StatusCode::UNPROCESSABLE_ENTITY, page)
        }
    };

    Ok(page)
}

pub async fn not_found<I, S>(State(context): State<AppContext<I, S>>, uri: Uri) -> (StatusCode, Markup)
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    site_debug!(Component::Pages, "🔍 No route for {}", uri.path());
    (StatusCode::NOT_FOUND, views::not_found(uri.path(), &context.content().contact))
}
