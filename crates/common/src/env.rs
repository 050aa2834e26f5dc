//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is opened.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Extract the on-disk path of a file-backed SQLite URL.
/// Returns `None` for in-memory databases and for other engines.
pub fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the directory holding a SQLite database file exists.
/// Other engines are left alone.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(database_url) else {
        return Ok(());
    };
    let dir = file.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    if tokio::fs::metadata(dir).await.is_err() {
        warn!(dir = %dir.display(), "sqlite data directory missing; creating it");
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    }
    info!(file = %file.display(), "using sqlite database file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_paths_are_extracted() {
        assert_eq!(sqlite_file_path("sqlite://data/students.db?mode=rwc"), Some(PathBuf::from("data/students.db")));
        assert_eq!(sqlite_file_path("sqlite:students.db"), Some(PathBuf::from("students.db")));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://u:p@localhost/db"), None);
    }

    #[tokio::test]
    async fn ensure_env_creates_missing_directory() {
        let dir = std::env::temp_dir().join(format!("student-registry-env-{}", std::process::id()));
        let url = format!("sqlite://{}/students.db?mode=rwc", dir.display());
        ensure_env(&url).await.unwrap();
        assert!(dir.is_dir());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
