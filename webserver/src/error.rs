//! WebServer-specific error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use catalog::{CatalogError, Component, site_debug, site_error};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Static asset not found: {path}")]
    AssetNotFound { path: String },

    #[error("Access denied: {path}")]
    AccessDenied { path: String },

    #[error("Inquiry delivery failed: {0}")]
    InquiryDelivery(String),

    #[error("Response building error: {0}")]
    Response(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::AssetNotFound { .. } => StatusCode::NOT_FOUND,
            WebServerError::Catalog(CatalogError::ItemNotInView { .. }) => StatusCode::NOT_FOUND,
            WebServerError::AccessDenied { .. } => StatusCode::FORBIDDEN,
            WebServerError::Catalog(CatalogError::InvalidInquiry(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            WebServerError::Config(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            site_error!(Component::Api, "❌ Request failed: {}", self);
        } else {
            site_debug!(Component::Api, "Request rejected ({}): {}", status, self);
        }
        let body = Json(json!({
            "status": "error",
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
