use crate::config::ApiConfig;
use crate::db;
use crate::handlers;
use crate::models::CANONICAL_ROLES;
use crate::services::{
    AccountService, Database, DirectoryService, HttpObjectStore, IngestService, ObjectStore,
};
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub db: Database,
    pub accounts: AccountService,
    pub directory: DirectoryService,
    pub ingest: IngestService,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    /// Build the application: connect, migrate, seed roles, wire the
    /// services and bind the listener.
    ///
    /// A failed database connection is fatal here; there is no degraded
    /// mode where the process serves without its store.
    pub async fn build(config: ApiConfig) -> Result<Self, AppError> {
        let pool = db::create_pool(&config.database).await.map_err(|e| {
            tracing::error!("Failed to connect to PostgreSQL: {}", e);
            AppError::DatabaseError(anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))
        })?;

        db::run_migrations(&pool).await.map_err(|e| {
            tracing::error!("Failed to run migrations: {}", e);
            AppError::DatabaseError(anyhow::anyhow!("Failed to run migrations: {}", e))
        })?;

        let database = Database::new(pool);

        // Idempotent: repeated bootstraps leave one row per role.
        database.seed_roles(&CANONICAL_ROLES).await.map_err(|e| {
            tracing::error!("Failed to seed canonical roles: {}", e);
            AppError::from(e)
        })?;

        let store: Arc<dyn ObjectStore> =
            Arc::new(HttpObjectStore::new(&config.storage).map_err(AppError::from)?);

        let state = AppState {
            config: config.clone(),
            db: database.clone(),
            accounts: AccountService::new(database.clone()),
            directory: DirectoryService::new(database),
            ingest: IngestService::new(store),
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/user/register", post(handlers::register))
            .route("/user/login", post(handlers::login))
            .route("/user/delete/:id_user", delete(handlers::delete_user))
            .route("/user/all", get(handlers::all_users))
            .route("/user/role/:id_role", get(handlers::users_by_role))
            .route("/user/:id_user", get(handlers::get_user))
            .route("/document/upload", post(handlers::upload_documents))
            // Room for the per-file cap plus multipart framing.
            .layer(DefaultBodyLimit::max(32 * 1024 * 1024))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state.clone());

        let host: IpAddr = config.common.host.parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("Invalid bind host '{}': {}", config.common.host, e))
        })?;
        let addr = SocketAddr::new(host, config.common.port);
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &Database {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
