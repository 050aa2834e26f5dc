use migration::MigratorTrait;
use sea_orm::{ColumnTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};



/// Fresh in-memory SQLite database with migrations applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub(crate) fn student(id: &str, name: &str, surname: &str) -> crate::student::Model {
    crate::student::Model { id: id.into(), name: name.into(), surname: surname.into() }
}

/// Rows stored under `id`; 0 or 1 while the primary key holds.
pub(crate) async fn count_by_id(db: &DatabaseConnection, id: &str) -> anyhow::Result<u64> {
    let n = crate::student::Entity::find()
        .filter(crate::student::Column::Id.eq(id))
        .count(db)
        .await?;
    Ok(n)
}
