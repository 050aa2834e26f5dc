use sea_orm::DatabaseConnection;
use tracing::{error, warn};

use crate::errors::ServiceError;
use crate::student::domain::Student;
use crate::student::repository::StudentRepository;

/// SeaORM-backed record store. Engine errors are logged here and collapsed
/// into `DuplicateKey` / `StorageFailure` before leaving.
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn create(&self, student: Student) -> Result<(), ServiceError> {
        let id = student.id.clone();
        models::student::insert(&self.db, student.into()).await.map_err(|e| {
            if e.is_duplicate() {
                warn!(student_id = %id, error = %e, "student insert rejected by unique constraint");
            } else {
                error!(student_id = %id, error = %e, "student insert failed");
            }
            ServiceError::from(e)
        })
    }

    async fn get_all(&self) -> Result<Vec<Student>, ServiceError> {
        let rows = models::student::list(&self.db).await.map_err(|e| {
            error!(error = %e, "student list query failed");
            ServiceError::StorageFailure
        })?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn fetch(&self, id: &str) -> Result<Option<Student>, ServiceError> {
        let row = models::student::find(&self.db, id).await.map_err(|e| {
            error!(student_id = %id, error = %e, "student lookup failed");
            ServiceError::StorageFailure
        })?;
        Ok(row.map(Student::from))
    }
}
