//! HTTP server for the flight statistics dashboards

mod error;
mod handlers;
mod pages;
mod routes;
mod state;

pub use error::ApiError;
pub use state::AppState;

use crate::loader::{DatasetLoader, DEFAULT_DATA_URL};
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host address (default: "127.0.0.1")
    pub host: String,
    /// Server port (default: 8050)
    pub port: u16,
    /// URL of the flight dataset CSV
    pub data_url: String,
    /// Optional local CSV path; takes precedence over the URL when set
    pub data_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8050,
            data_url: DEFAULT_DATA_URL.to_string(),
            data_path: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        ServerConfig {
            host: host.into(),
            port,
            ..ServerConfig::default()
        }
    }
}

/// Runs the dashboard server.
///
/// Loads the dataset once (fatal on failure, no retry), then serves the
/// dashboard pages and figure endpoints until the process exits.
///
/// # Example
/// ```rust,no_run
/// use flightstats::server::{run_server, ServerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ServerConfig::default();
///     run_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    // One-time dataset load; any failure here aborts startup
    let loader = DatasetLoader::new()?;
    let table = match &config.data_path {
        Some(path) => loader.load_file(path)?,
        None => loader.fetch(&config.data_url).await?,
    };

    // Create application state
    let state = Arc::new(AppState::new(table));

    // Create router
    let app = routes::create_router(state);

    // Build server address
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    // Run server
    axum::serve(listener, app).await?;

    Ok(())
}
