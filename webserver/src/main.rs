//! WebServer entry point

use catalog::{Component, logging, site_info};
use clap::Parser;
use tokio::signal;

use webserver::{Args, LoggingInquirySink, RealStaticFileServer, SiteConfig, WebServer, WebServerResult};

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();
    logging::init_tracing(Some(args.log_level.as_str()));

    let config = SiteConfig::try_from(args)?;
    logging::log_startup(Component::Server, &format!("webserver on http://{}", config.bind_address));

    site_info!(
        Component::Server,
        static_dir = %config.static_dir.display(),
        show_prices = config.show_prices,
        "📁 Serving static assets from {}",
        config.static_dir.display()
    );

    let static_server = RealStaticFileServer::new(&config.static_dir);
    let inquiry_sink = LoggingInquirySink::new();

    let mut webserver = WebServer::new(config, inquiry_sink, static_server);

    // Set up graceful shutdown
    let shutdown_sender = webserver.get_shutdown_sender();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown(Component::Server, "Received Ctrl+C signal");
                let _ = shutdown_sender.send(()).await;
            }
            Err(err) => {
                logging::log_error(Component::Server, "Signal handling", &err);
            }
        }
    });

    webserver.run().await?;

    logging::log_success(Component::Server, "WebServer stopped gracefully");
    Ok(())
}
