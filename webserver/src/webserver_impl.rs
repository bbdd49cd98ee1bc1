//! Main webserver implementation
//!
//! The WebServer struct wires the injected services into the router and runs
//! it until a shutdown signal arrives.

use axum::{
    Router,
    routing::{get, post},
};
use catalog::{Component, logging, site_info};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::error::{WebServerError, WebServerResult};
use crate::state::{AppContext, WebServerState};
use crate::traits::{InquirySink, StaticFileServer};
use crate::web::handlers::{api, pages, static_files};

/// Main webserver with dependency injection
pub struct WebServer<I, S>
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    context: AppContext<I, S>,
    shutdown_tx: mpsc::Sender<()>,
    shutdown_rx: Option<mpsc::Receiver<()>>,
}

impl<I, S> WebServer<I, S>
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    /// Create new webserver with injected dependencies
    pub fn new(config: SiteConfig, inquiry_sink: I, static_server: S) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        Self {
            context: AppContext::new(WebServerState::new(config), inquiry_sink, static_server),
            shutdown_tx,
            shutdown_rx: Some(shutdown_rx),
        }
    }

    pub fn context(&self) -> &AppContext<I, S> {
        &self.context
    }

    /// Get shutdown sender for graceful shutdown
    pub fn get_shutdown_sender(&self) -> mpsc::Sender<()> {
        self.shutdown_tx.clone()
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        router(self.context.clone())
    }

    /// Serve until the shutdown sender fires
    pub async fn run(&mut self) -> WebServerResult<()> {
        let bind_address = self.context.state.config.bind_address;
        let listener = TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e)))?;
        let local_address = listener.local_addr()?;

        let mut shutdown_rx = self
            .shutdown_rx
            .take()
            .ok_or_else(|| WebServerError::ServerStartup("Server already started".to_string()))?;

        site_info!(Component::Server, "🌐 Web server listening on http://{}", local_address);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(async move {
                shutdown_rx.recv().await;
                logging::log_shutdown(Component::Server, "Shutdown signal received");
            })
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Server error: {}", e)))?;

        Ok(())
    }
}

/// Router over every page, API endpoint and asset route
pub fn router<I, S>(context: AppContext<I, S>) -> Router
where
    I: InquirySink + 'static,
    S: StaticFileServer + 'static,
{
    Router::new()
        // Pages
        .route("/", get(pages::home::<I, S>))
        .route("/about", get(pages::about::<I, S>))
        .route("/gallery", get(pages::gallery::<I, S>))
        .route("/portfolio", get(pages::portfolio::<I, S>))
        .route("/inquiry", post(pages::submit_inquiry::<I, S>))
        // JSON API
        .route("/api/gallery", get(api::gallery::<I, S>))
        .route("/api/gallery/viewer", get(api::gallery_viewer::<I, S>))
        .route("/api/portfolio", get(api::portfolio::<I, S>))
        .route("/api/products", get(api::products::<I, S>))
        .route("/api/testimonials", get(api::testimonials::<I, S>))
        .route("/api/inquiry", post(api::submit_inquiry::<I, S>))
        // Assets
        .route("/static/*path", get(static_files::serve_static::<I, S>))
        // Health check
        .route("/health", get(api::health::<I, S>))
        .fallback(pages::not_found::<I, S>)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(context)
}
