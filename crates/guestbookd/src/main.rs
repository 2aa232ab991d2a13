//! guestbookd — the guestbook daemon.
//!
//! Single binary that assembles the guestbook service:
//! - Greeting store (redb)
//! - Last-write cache
//! - Outbound content fetcher
//! - Web front end (axum + askama)
//!
//! # Usage
//!
//! ```text
//! guestbookd serve --port 8080 --data-dir /var/lib/guestbook
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;

use guestbook_web::WebState;
use guestbook_web::cache::LastWriteCache;
use guestbook_web::fetch::HttpFetcher;

#[derive(Parser)]
#[command(name = "guestbookd", about = "Guestbook daemon")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the guestbook over HTTP.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Data directory for the greeting store.
        #[arg(long, default_value = "/var/lib/guestbook")]
        data_dir: PathBuf,

        /// Base URL of the external identity provider.
        #[arg(long, default_value = "/auth")]
        auth_base_url: String,

        /// Timeout for outbound content fetches, in seconds.
        #[arg(long, default_value = "10")]
        fetch_timeout: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,guestbookd=debug,guestbook=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            port,
            data_dir,
            auth_base_url,
            fetch_timeout,
        } => serve(port, data_dir, auth_base_url, fetch_timeout).await,
    }
}

async fn serve(
    port: u16,
    data_dir: PathBuf,
    auth_base_url: String,
    fetch_timeout: u64,
) -> anyhow::Result<()> {
    info!("guestbook daemon starting");

    // Ensure data directory exists.
    std::fs::create_dir_all(&data_dir)?;
    let db_path = data_dir.join("guestbook.redb");

    let store = guestbook_state::GreetingStore::open(&db_path)?;
    info!(path = ?db_path, "greeting store opened");

    let state = WebState {
        store,
        cache: LastWriteCache::new(),
        fetcher: Arc::new(HttpFetcher::new(Duration::from_secs(fetch_timeout))),
        auth_urls: guestbook_auth::AuthUrls::new(auth_base_url),
    };

    let router = guestbook_web::build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "web server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Graceful shutdown on Ctrl-C.
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C handler");
            info!("shutdown signal received");
        })
        .await?;

    info!("guestbook daemon stopped");
    Ok(())
}
