//! devterm-web: DevTerm Web Main Binary
//!
//! Main entry point for the DevTerm Web developer tool server.
//!
//! Usage:
//!   devterm-web           - Start the HTTP server
//!   devterm-web --help    - Show help

use devterm_core::{Config, ToolRegistry};
use devterm_tools::register_default_tools;
use tracing_subscriber::EnvFilter;

/// Run mode
enum RunMode {
    /// Start the HTTP server
    Server,
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match parse_args() {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("devterm-web {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Server => {}
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting devterm-web...");

    // Build the tool registry
    let mut registry = ToolRegistry::new();
    register_default_tools(&mut registry, &config);
    tracing::info!(
        "Registered {} tools: {:?}",
        registry.len(),
        registry.tool_names()
    );

    // Start the HTTP server
    let server_config = config.clone();
    let handle = tokio::spawn(async move {
        if let Err(e) = devterm_api::start_server(&server_config, registry).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });
    tracing::info!(
        "devterm-web serving on http://{}:{}",
        config.api.host,
        config.api.port
    );
    tracing::info!("Press Ctrl+C to exit");

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    handle.abort();

    Ok(())
}

/// Parse command line arguments
fn parse_args() -> RunMode {
    let args: Vec<String> = std::env::args().collect();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => return RunMode::Help,
            "--version" | "-v" => return RunMode::Version,
            _ => {}
        }
    }

    RunMode::Server
}

/// Print help message
fn print_help() {
    println!("devterm-web - browser-based developer utility tools");
    println!();
    println!("Usage:");
    println!("  devterm-web           Start the HTTP server");
    println!("  devterm-web --help    Show this help message");
    println!("  devterm-web --version Show version");
    println!();
    println!("Environment Variables:");
    println!("  API_HOST                  Bind host (default: 127.0.0.1)");
    println!("  API_PORT                  Bind port (default: 5000)");
    println!("  HTTP_TOOL_TIMEOUT_SECS    HTTP client tool timeout (default: 30)");
    println!("  HTTP_TOOL_MAX_BODY_CHARS  HTTP client tool body cap (default: 2000)");
}
