use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use models::db::DatabaseConnection;
use service::student::repo::seaorm::SeaOrmStudentRepository;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the configured database and bring the schema up to date.
pub async fn connect_and_migrate(cfg: &AppConfig) -> Result<DatabaseConnection, StartupError> {
    common::env::ensure_env(&cfg.database.url).await?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    info!("database migrations applied");
    Ok(db)
}

/// Resolve `server.host:server.port`; hostnames such as `localhost` are allowed.
async fn load_bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let addr = cfg.server.bind_addr();
    let resolved = tokio::net::lookup_host(addr.as_str())
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {addr}: {e}")))?
        .next()
        .ok_or_else(|| StartupError::InvalidConfig(format!("bind address {addr} did not resolve")));
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_hostname_bind_address() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "localhost".into();
        cfg.server.port = 8888;
        let addr = load_bind_addr(&cfg).await.unwrap();
        assert_eq!(addr.port(), 8888);
        assert!(addr.ip().is_loopback());
    }

    #[tokio::test]
    async fn unresolvable_bind_address_is_invalid_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        let err = load_bind_addr(&cfg).await.unwrap_err();
        assert!(matches!(err, StartupError::InvalidConfig(_)));
    }
}

/// Wire store → service → router for an already migrated database.
pub fn build_app(db: DatabaseConnection, cfg: &AppConfig) -> Router {
    let repo = Arc::new(SeaOrmStudentRepository::new(db));
    let state = AppState::new(repo, cfg.server.public_url.clone());
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = connect_and_migrate(&cfg).await?;
    let app = build_app(db, &cfg);

    let addr = load_bind_addr(&cfg).await?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "student registry listening");
    axum::serve(listener, app).await?;
    Ok(())
}
