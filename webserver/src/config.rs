//! Command line arguments and validated server configuration

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::{WebServerError, WebServerResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "webserver")]
#[command(about = "Serves the export company website")]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Static files directory (product images, favicon)
    #[arg(long, default_value = "./static")]
    pub static_dir: PathBuf,

    /// Show package prices on product cards and in the API
    #[arg(long)]
    pub show_prices: bool,

    /// WhatsApp number used by the contact buttons, digits only
    #[arg(long)]
    pub whatsapp_number: Option<String>,
}

/// Validated server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub bind_address: SocketAddr,
    pub log_level: String,
    pub static_dir: PathBuf,
    pub show_prices: bool,
    pub whatsapp_number: Option<String>,
}

impl SiteConfig {
    /// Configuration for tests and embedding: loopback, ephemeral port
    pub fn local(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 0)),
            log_level: "info".to_string(),
            static_dir: static_dir.into(),
            show_prices: false,
            whatsapp_number: None,
        }
    }
}

impl TryFrom<Args> for SiteConfig {
    type Error = WebServerError;

    fn try_from(args: Args) -> WebServerResult<Self> {
        let ip: IpAddr = args
            .host
            .parse()
            .map_err(|e| WebServerError::config(format!("Invalid host '{}': {}", args.host, e)))?;

        let log_level = args.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(WebServerError::config(format!("Invalid log level: {}", args.log_level)));
        }

        if let Some(number) = &args.whatsapp_number {
            if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
                return Err(WebServerError::config(format!(
                    "WhatsApp number must contain digits only: {number}"
                )));
            }
        }

        Ok(Self {
            bind_address: SocketAddr::new(ip, args.port),
            log_level,
            static_dir: args.static_dir,
            show_prices: args.show_prices,
            whatsapp_number: args.whatsapp_number,
        })
    }
}
