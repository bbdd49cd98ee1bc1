//! Webserver library for the export company website
//!
//! Serves the home, about, gallery and portfolio pages rendered from the
//! catalog content, a small JSON API over the same data, the wholesale inquiry
//! endpoints and static assets.

pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{Args, SiteConfig};
pub use error::{WebServerError, WebServerResult};
pub use state::{AppContext, WebServerState};
pub use types::*;
pub use webserver_impl::{WebServer, router};

// Re-export trait definitions
pub use traits::{InquirySink, StaticAsset, StaticFileServer};

// Re-export service implementations
pub use services::{LoggingInquirySink, RealStaticFileServer};
