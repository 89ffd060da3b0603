//! Database module: models, schema and per-resource queries.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and submitted field sets
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: pool, database bootstrap and per-request connections
//! - `students.rs`, `courses.rs`, `enrollments.rs`: statements for each resource

pub mod courses;
pub mod enrollments;
pub mod models;
pub mod schema;
pub mod sqlite;
pub mod students;

pub use models::{Course, EnrollmentListing, Student};
pub use schema::SQLITE_INIT;
pub use sqlite::{RegistryStorage, RequestConnection};
