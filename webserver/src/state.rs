//! Webserver state management
//!
//! Read-only site state plus the injected services, shared by every handler.

use catalog::SiteContent;
use std::sync::Arc;
use std::time::Instant;

use crate::config::SiteConfig;
use crate::traits::{InquirySink, StaticFileServer};

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    pub config: SiteConfig,
    pub content: SiteContent,
    pub server_start_time: Instant,
}

impl WebServerState {
    pub fn new(config: SiteConfig) -> Self {
        let content = match &config.whatsapp_number {
            Some(number) => SiteContent::with_whatsapp_number(number.clone()),
            None => SiteContent::default(),
        };

        Self {
            config,
            content,
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    pub fn show_prices(&self) -> bool {
        self.config.show_prices
    }
}

/// Handler state: site state and services behind shared pointers
pub struct AppContext<I, S> {
    pub state: Arc<WebServerState>,
    pub inquiry_sink: Arc<I>,
    pub static_server: Arc<S>,
}

impl<I, S> AppContext<I, S>
where
    I: InquirySink,
    S: StaticFileServer,
{
    pub fn new(state: WebServerState, inquiry_sink: I, static_server: S) -> Self {
        Self {
            state: Arc::new(state),
            inquiry_sink: Arc::new(inquiry_sink),
            static_server: Arc::new(static_server),
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.state.content
    }
}

impl<I, S> Clone for AppContext<I, S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            inquiry_sink: Arc::clone(&self.inquiry_sink),
            static_server: Arc::clone(&self.static_server),
        }
    }
}
