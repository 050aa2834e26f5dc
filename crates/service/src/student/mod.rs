//! Student module: domain, repository (record store) and service layers.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::StudentService;
