use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{decorate, DecoratedStudent, Student};
use super::repository::StudentRepository;
use crate::errors::ServiceError;

/// Student business service independent of web framework.
///
/// Pass-through over the record store; the only transformation is decorating
/// outgoing records with a self link rooted at the caller's `base_url`.
pub struct StudentService<R: StudentRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: StudentRepository + ?Sized> StudentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// List all students, each decorated with its self link.
    ///
    /// # Examples
    /// ```
    /// use service::student::{StudentService, domain::Student, repository::mock::MockStudentRepository};
    /// use std::sync::Arc;
    /// let svc = StudentService::new(Arc::new(MockStudentRepository::default()));
    /// tokio_test::block_on(svc.add(Student::new("s1", "Ada", "Lovelace"))).unwrap();
    /// let all = tokio_test::block_on(svc.list("http://localhost:8888")).unwrap();
    /// assert_eq!(all[0].self_href(), Some("http://localhost:8888/students/s1"));
    /// ```
    #[instrument(skip(self))]
    pub async fn list(&self, base_url: &str) -> Result<Vec<DecoratedStudent>, ServiceError> {
        let students = self.repo.get_all().await?;
        debug!(count = students.len(), "students listed");
        Ok(students.into_iter().map(|s| decorate(s, base_url)).collect())
    }

    /// Fetch one student. `Ok(None)` means the id does not exist.
    #[instrument(skip(self))]
    pub async fn fetch(&self, id: &str, base_url: &str) -> Result<Option<DecoratedStudent>, ServiceError> {
        Ok(self.repo.fetch(id).await?.map(|s| decorate(s, base_url)))
    }

    /// Store a new student.
    ///
    /// # Examples
    /// ```
    /// use service::{errors::ServiceError, student::{StudentService, domain::Student, repository::mock::MockStudentRepository}};
    /// use std::sync::Arc;
    /// let svc = StudentService::new(Arc::new(MockStudentRepository::default()));
    /// tokio_test::block_on(svc.add(Student::new("s1", "Ada", "Lovelace"))).unwrap();
    /// let again = tokio_test::block_on(svc.add(Student::new("s1", "Ada", "Lovelace")));
    /// assert_eq!(again, Err(ServiceError::DuplicateKey));
    /// ```
    #[instrument(skip(self, student), fields(student_id = %student.id))]
    pub async fn add(&self, student: Student) -> Result<(), ServiceError> {
        self.repo.create(student).await?;
        info!("student_created");
        Ok(())
    }

    pub async fn add_fields(&self, name: &str, surname: &str, id: &str) -> Result<(), ServiceError> {
        self.add(Student::new(id, name, surname)).await
    }

    pub async fn delete(&self, id: &str) -> Result<Student, ServiceError> {
        self.repo.delete(id).await
    }
}
