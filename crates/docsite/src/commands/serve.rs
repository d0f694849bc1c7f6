//! `docsite serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsite_content::ContentTable;
use docsite_server::{ServerConfig, run_server};

use crate::config::{CliSettings, Config};
use crate::error::CliError;
use crate::output::Output;

/// Content table served when no `content_file` is configured.
const DEFAULT_CONTENT: &str = include_str!("../../content/docs.json");

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content table JSON file (overrides config).
    #[arg(long)]
    content: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Site name for the header and browser-tab title (overrides config).
    #[arg(long)]
    site_name: Option<String>,

    /// Enable verbose output (show request and content-table logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content loading fails, or the
    /// server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            site_name: self.site_name,
            content_file: self.content,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Load the content table
        let table = match &config.site_resolved.content_file {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                output.info(&format!("Content table: {}", path.display()));
                ContentTable::from_json(&json)?
            }
            None => {
                output.info("Content table: built-in");
                ContentTable::from_json(DEFAULT_CONTENT)?
            }
        };

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Site name: {}", config.site_resolved.name));
        output.info(&format!("Serving {} pages", table.len()));

        // Build server config and run
        let server_config = ServerConfig {
            host: config.server.host,
            port: config.server.port,
            site_name: config.site_resolved.name,
        };
        run_server(server_config, table).await?;

        Ok(())
    }
}
