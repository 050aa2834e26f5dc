use async_trait::async_trait;

use super::domain::Student;
use crate::errors::ServiceError;

/// Record store for students.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Persist a new record atomically. `DuplicateKey` when the id is taken.
    async fn create(&self, student: Student) -> Result<(), ServiceError>;
    /// Every record, in storage order.
    async fn get_all(&self) -> Result<Vec<Student>, ServiceError>;
    /// `Ok(None)` when the id is absent.
    async fn fetch(&self, id: &str) -> Result<Option<Student>, ServiceError>;
    /// Not supported; always `NotImplemented`.
    async fn delete(&self, _id: &str) -> Result<Student, ServiceError> {
        Err(ServiceError::NotImplemented)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockStudentRepository {
        students: Mutex<BTreeMap<String, Student>>,
        failing: bool,
    }

    impl MockStudentRepository {
        /// A store whose every operation reports `StorageFailure`.
        pub fn failing() -> Self {
            Self { students: Mutex::default(), failing: true }
        }

        pub fn len(&self) -> usize {
            self.students.lock().map(|s| s.len()).unwrap_or_default()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.failing { Err(ServiceError::StorageFailure) } else { Ok(()) }
        }
    }

    #[async_trait]
    impl StudentRepository for MockStudentRepository {
        async fn create(&self, student: Student) -> Result<(), ServiceError> {
            self.check()?;
            let mut students = self.students.lock().map_err(|_| ServiceError::StorageFailure)?;
            if students.contains_key(&student.id) {
                return Err(ServiceError::DuplicateKey);
            }
            students.insert(student.id.clone(), student);
            Ok(())
        }

        async fn get_all(&self) -> Result<Vec<Student>, ServiceError> {
            self.check()?;
            let students = self.students.lock().map_err(|_| ServiceError::StorageFailure)?;
            Ok(students.values().cloned().collect())
        }

        async fn fetch(&self, id: &str) -> Result<Option<Student>, ServiceError> {
            self.check()?;
            let students = self.students.lock().map_err(|_| ServiceError::StorageFailure)?;
            Ok(students.get(id).cloned())
        }
    }
}
