//! Flight Statistics Dashboard Server Binary
//!
//! Run with: `cargo run --bin flightstats-server`

use flightstats::{ServerConfig, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Note: Tracing is initialized in run_server()
    // Set RUST_LOG environment variable to control log level:
    //   RUST_LOG=debug cargo run --bin flightstats-server

    // Create configuration from environment variables or defaults
    let mut config = ServerConfig::default();
    if let Ok(host) = std::env::var("HOST") {
        config.host = host;
    }
    if let Ok(port) = std::env::var("PORT") {
        config.port = port.parse::<u16>().unwrap_or(config.port);
    }
    if let Ok(url) = std::env::var("DATA_URL") {
        config.data_url = url;
    }
    if let Ok(path) = std::env::var("DATA_PATH") {
        config.data_path = Some(path);
    }

    println!("Starting Flight Statistics Dashboard Server...");
    println!("   Host: {}", config.host);
    println!("   Port: {}", config.port);
    match &config.data_path {
        Some(path) => println!("   Dataset: {} (local file)", path),
        None => println!("   Dataset: {}", config.data_url),
    }
    println!();
    println!(
        "Server will be available at: http://{}:{}",
        config.host, config.port
    );
    println!();
    println!("Available endpoints:");
    println!("  GET  /                 - Airline performance dashboard");
    println!("  GET  /delay            - Flight delay statistics dashboard");
    println!("  GET  /health           - Health check");
    println!("  GET  /years            - Years available in the dataset");
    println!("  GET  /api/performance  - Performance figures for a year");
    println!("  GET  /api/delays       - Delay-category figures for a year");
    println!();

    // Run server
    run_server(config).await?;

    Ok(())
}
