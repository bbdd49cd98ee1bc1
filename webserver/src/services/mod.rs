//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod inquiry_sink;
pub mod static_server;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use inquiry_sink::LoggingInquirySink;
pub use static_server::RealStaticFileServer;
