//! Pets service CLI
//!
//! ```sh
//! # Run with default config (~/.config/pets-service/config.toml)
//! pets-service
//!
//! # Custom config path and port
//! pets-service --config /etc/pets-service/config.toml --port 8080
//!
//! # Validate config without starting
//! pets-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use pets_service::config::AppConfig;
use pets_service::DatabaseConfig;
use pets_service::server::{init_tracing, ServerHandle, ServerOptions};

/// User and pet management REST API.
#[derive(Parser, Debug)]
#[command(
    name = "pets-service",
    version,
    about = "User and pet management REST API",
    long_about = "REST API for users, their pets and a breed lookup.\n\n\
                  Default config: ~/.config/pets-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PETS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(pets_service::default_config_path);

    let (mut config, load_error) = AppConfig::load_or_default(&config_path);

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    match load_error {
        None => {
            init_tracing(&config);
            info!("Configuration loaded from {}", config_path.display());
        }
        Some(e) => {
            if cli.check {
                eprintln!("Invalid configuration: {}", e);
                return Err(e.into());
            }
            init_tracing(&config);
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!(
            "   Database    : {}",
            DatabaseConfig::from(&config.database).redacted_url()
        );
        println!("   Static dir  : {} -> {}", config.static_files.dir, config.static_files.mount_path);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
