//! Dial pad page server entry point
//!
//! Loads the configuration document once (fatal on failure), then serves the
//! page, its configuration and the page bridge until Ctrl+C.

use std::net::SocketAddr;

use clap::Parser;
use shared::{Component, ConfigStore, logging};
use tokio::signal;

use webserver::{WebServer, WebServerError, WebServerResult};

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Conference dial pad page server")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server (browser connections)
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Configuration document: a file path or an http(s) URL
    #[arg(long, default_value = "./config.json")]
    config: String,

    /// Static files directory
    #[arg(long, default_value = "./static")]
    static_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(Component::Server, &format!("dial pad server (config: {})", args.config));

    let store = ConfigStore::load(&args.config).await.inspect_err(|e| {
        logging::log_error(Component::Server, "Configuration load", e);
    })?;

    let config = store.config();
    logging::log_success(
        Component::Server,
        &format!(
            "Configuration loaded (domain {}, ivr {}, tts {})",
            config.domain,
            if config.ivr.enabled { "on" } else { "off" },
            if config.enable_tts { "on" } else { "off" }
        ),
    );

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::ServerStartup(format!("Invalid address: {e}")))?;

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(Component::Server, "Received Ctrl+C signal"),
            Err(err) => {
                logging::log_error(Component::Server, "Signal handling", &err);
                std::future::pending::<()>().await;
            }
        }
    };

    WebServer::new(store, args.static_dir).run(addr, shutdown).await?;

    logging::log_success(Component::Server, "Server stopped gracefully");
    Ok(())
}
