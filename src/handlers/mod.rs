//! One module per page. Each POST applies at most one write on the request's
//! connection, then re-reads and renders the full page on that same connection.

pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod students;
