//! Service layer for the student registry.
//! - `student::repository` is the record store seam (SeaORM and in-memory implementations).
//! - `student::service` decorates records with self links and passes outcomes through.

pub mod errors;
pub mod student;
#[cfg(test)]
pub mod test_support;
