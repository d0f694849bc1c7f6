//! HTTP server for docsite.
//!
//! Serves the documentation pages composed by `docsite-site` over axum:
//!
//! - `GET /` redirects to the docs index
//! - `GET /docs` renders the index of documentation pages
//! - `GET /docs/{docSection}` renders one documentation page
//! - `GET /about` renders the about page
//!
//! Unresolvable sections render the not-found page with status 404; the
//! content table guarantees that page exists, so request handling is
//! infallible once the server is up.

mod app;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use docsite_content::ContentTable;
use docsite_render::{Highlighter, NullHighlighter};
use docsite_site::SiteOptions;

pub use error::ServerError;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Site name for the header and browser-tab title.
    pub site_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let options = SiteOptions::default();
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            site_name: options.site_name,
        }
    }
}

/// Run the server until shutdown.
///
/// Pages are highlighted client-side by default; pass a server-side
/// [`Highlighter`] through [`run_server_with_highlighter`] to rewrite code
/// blocks before they leave the server.
///
/// # Errors
///
/// Returns an error if the listen address is invalid or binding fails.
pub async fn run_server(config: ServerConfig, table: ContentTable) -> Result<(), ServerError> {
    run_server_with_highlighter(config, table, Arc::new(NullHighlighter)).await
}

/// Run the server with an explicit highlighting capability.
///
/// # Errors
///
/// Returns an error if the listen address is invalid or binding fails.
pub async fn run_server_with_highlighter(
    config: ServerConfig,
    table: ContentTable,
    highlighter: Arc<dyn Highlighter>,
) -> Result<(), ServerError> {
    let options = SiteOptions {
        site_name: config.site_name.clone(),
        ..SiteOptions::default()
    };

    let state = Arc::new(AppState {
        table,
        options,
        highlighter,
    });

    let app = app::create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let addr = SocketAddr::from_str(&addr).map_err(|source| ServerError::Address { addr, source })?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
