//! Service trait definitions for dependency injection
//!
//! The collaborators of the page handlers are abstracted through these traits
//! for testability

use async_trait::async_trait;
use catalog::Inquiry;

use crate::error::WebServerResult;
use crate::types::InquiryReceipt;

/// Receives validated inquiries
#[mockall::automock]
#[async_trait]
pub trait InquirySink: Send + Sync {
    /// Hand over an accepted inquiry and acknowledge it
    async fn submit(&self, inquiry: Inquiry) -> WebServerResult<InquiryReceipt>;

    /// Number of inquiries acknowledged since startup
    async fn received_count(&self) -> u64;
}

/// Static asset serving service trait
#[mockall::automock]
#[async_trait]
pub trait StaticFileServer: Send + Sync {
    /// Load an asset by its path below the static root
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticAsset>;
}

/// Loaded static asset
#[derive(Debug, Clone)]
pub struct StaticAsset {
    pub content: Vec<u8>,
    pub content_type: String,
    pub cache_control: Option<String>,
}

impl StaticAsset {
    pub fn new(content: Vec<u8>, content_type: String) -> Self {
        Self {
            content,
            content_type,
            cache_control: None,
        }
    }

    /// Set cache control header
    pub fn with_cache_control(mut self, cache_control: String) -> Self {
        self.cache_control = Some(cache_control);
        self
    }
}
