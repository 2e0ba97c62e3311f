//! Server runtime.
//!
//! [`ServerHandle`] owns the whole lifecycle: database connection,
//! migrations, service wiring, the REST API listener and graceful shutdown.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::application::{BreedsService, PetService, UserService};
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::infrastructure::{init_database, DatabaseConfig, HttpBreedSource};
use crate::interfaces::http::{create_api_router, AppState};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the service.
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running service.
///
/// # Examples
///
/// ```rust,no_run
/// use pets_service::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.shutdown_signal().wait().await;
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Port the API is listening on.
    pub port: u16,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Start the service with the given options.
    ///
    /// This will:
    /// 1. Connect to the database and run migrations (if enabled)
    /// 2. Wire repositories, services and the breed source
    /// 3. Bind the REST API listener (with Swagger UI and static files)
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!("Starting pets service...");

        // ── Database ───────────────────────────────────────────
        let db_config = DatabaseConfig::from(&app_cfg.database);
        let db = match init_database(&db_config).await {
            Ok(db) => db,
            Err(e) => {
                error!("Failed to connect to database: {}", e);
                return Err(e.into());
            }
        };

        if opts.auto_migrate {
            info!("Running database migrations...");
            if let Err(e) = Migrator::up(&db, None).await {
                error!("Failed to run migrations: {}", e);
                return Err(e.into());
            }
            info!("Migrations completed");
        } else {
            warn!("Skipping database migrations");
        }

        // ── Listener ───────────────────────────────────────────
        let listener = tokio::net::TcpListener::bind(app_cfg.server.address()).await?;
        let local_addr = listener.local_addr()?;
        let breeds_base_url = catalogue_base_url(app_cfg.breeds.base_url.as_deref(), local_addr);
        info!(%breeds_base_url, "Breed catalogue location");

        // ── Services ───────────────────────────────────────────
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let user_service = Arc::new(UserService::new(repos.clone()));
        let pet_service = Arc::new(PetService::new(repos.clone()));

        let breed_source = HttpBreedSource::new(
            app_cfg.breeds.path.clone(),
            Duration::from_secs(app_cfg.breeds.timeout_secs),
        )?;
        let breeds_service = Arc::new(BreedsService::new(Arc::new(breed_source)));

        let state = AppState::new(user_service, pet_service, breeds_service, repos, breeds_base_url);

        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        // ── REST API ───────────────────────────────────────────
        let api_router = create_api_router(state, &app_cfg.static_files);

        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_shutdown = shutdown_signal.clone();
        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            config: app_cfg,
            port: local_addr.port(),
            db,
            shutdown,
            api_task,
        })
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to fully stop after shutdown has been triggered.
    pub async fn wait(self) {
        info!("Waiting for server tasks to complete...");

        let db = self.db;
        let api_task = self.api_task;
        self.shutdown
            .cleanup(|| async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API server task panicked: {}", e),
                }

                if let Err(e) = db.close().await {
                    warn!("Error closing database connection: {}", e);
                } else {
                    info!("Database connection closed");
                }
            })
            .await;

        info!("Pets service shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("Shutting down pets service...");
        self.trigger_shutdown();
        self.wait().await;
    }

    /// Check if the server is still running.
    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// Configured catalogue base URL, or this server's own listener. A wildcard
/// bind address is reached through loopback.
fn catalogue_base_url(configured: Option<&str>, local: SocketAddr) -> String {
    if let Some(url) = configured {
        return url.to_string();
    }

    let ip = match local.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
        ip => ip,
    };
    format!("http://{}/", SocketAddr::new(ip, local.port()))
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config.server.shutdown_timeout = 5;
        config.database.url = "sqlite::memory:".to_string();
        config.database.max_connections = 1;
        config
    }

    #[tokio::test]
    async fn starts_and_shuts_down_cleanly() {
        let handle = ServerHandle::start(ServerOptions {
            config: in_memory_config(),
            auto_migrate: true,
        })
        .await
        .unwrap();

        assert_ne!(handle.port, 0);
        assert!(handle.is_running());

        handle.shutdown().await;
    }

    #[test]
    fn catalogue_base_url_prefers_configuration() {
        let local: SocketAddr = "0.0.0.0:8000".parse().unwrap();
        assert_eq!(
            catalogue_base_url(Some("http://cdn.local/"), local),
            "http://cdn.local/"
        );
    }

    #[test]
    fn catalogue_base_url_falls_back_to_listener() {
        let wildcard: SocketAddr = "0.0.0.0:8123".parse().unwrap();
        assert_eq!(catalogue_base_url(None, wildcard), "http://127.0.0.1:8123/");

        let wildcard_v6: SocketAddr = "[::]:8123".parse().unwrap();
        assert_eq!(catalogue_base_url(None, wildcard_v6), "http://[::1]:8123/");

        let bound: SocketAddr = "10.1.2.3:9000".parse().unwrap();
        assert_eq!(catalogue_base_url(None, bound), "http://10.1.2.3:9000/");
    }

    #[tokio::test]
    async fn breed_lookup_reads_shipped_catalogue_from_own_listener() {
        let handle = ServerHandle::start(ServerOptions {
            config: in_memory_config(),
            auto_migrate: true,
        })
        .await
        .unwrap();

        let response = reqwest::Client::new()
            .get(format!("http://127.0.0.1:{}/breeds/dog", handle.port))
            .header(reqwest::header::HOST, "unrelated.example:1")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["data"][0], "Mixed Breed");
        assert_eq!(body["data"][1], "Labrador");

        handle.shutdown().await;
    }
}
