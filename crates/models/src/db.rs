use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database};
use tracing::info;

pub use configs::DatabaseConfig;
pub use sea_orm::DatabaseConnection;

const IN_MEMORY_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Open a pooled connection using the tuned settings from `DatabaseConfig`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);

    // every pooled connection to `:memory:` would see its own empty database
    if is_in_memory_sqlite(&cfg.url) {
        opts.max_connections(1).min_connections(1).idle_timeout(IN_MEMORY_IDLE_TIMEOUT);
    } else {
        opts.max_connections(cfg.max_connections);
    }

    let db = Database::connect(opts).await?;
    info!(backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

fn is_in_memory_sqlite(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_sqlite() {
        assert!(is_in_memory_sqlite("sqlite::memory:"));
        assert!(!is_in_memory_sqlite("sqlite://students.db?mode=rwc"));
        assert!(!is_in_memory_sqlite("postgres://localhost/students"));
    }

    #[tokio::test]
    async fn connects_to_in_memory_sqlite() {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
        let db = connect_with_config(&cfg).await.unwrap();
        assert_eq!(db.get_database_backend(), sea_orm::DatabaseBackend::Sqlite);
    }
}
