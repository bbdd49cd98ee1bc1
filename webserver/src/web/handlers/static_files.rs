//! Static file serving handlers
//!
//! Serve product images and other assets with content types and caching

use axum::{
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::Response,
};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppContext;
use crate::traits::{InquirySink, StaticFileServer};

/// Serve files below the static root
pub async fn serve_static<I, S>(
    State(context): State<AppContext<I, S>>,
    Path(path): Path<String>,
) -> WebServerResult<Response>
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    let asset = context.static_server.serve_file(&path).await?;

    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, asset.content_type);

    if let Some(cache_control) = asset.cache_control {
        response = response.header(header::CACHE_CONTROL, cache_control);
    }

    response
        .body(Body::from(asset.content))
        .map_err(|e| WebServerError::Response(e.to_string()))
}
