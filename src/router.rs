use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::db::RegistryStorage;
use crate::handlers::{
    courses::{list_courses_handler, submit_courses_handler},
    dashboard::dashboard_handler,
    enrollments::{list_enrollments_handler, submit_enrollments_handler},
    students::{list_students_handler, submit_students_handler},
};

#[derive(Clone)]
pub struct RegistryState {
    pub storage: RegistryStorage,
}

impl RegistryState {
    pub fn new(storage: RegistryStorage) -> Self {
        Self { storage }
    }
}

pub fn registry_router(state: RegistryState) -> Router {
    Router::new()
        .route("/", get(dashboard_handler))
        .route(
            "/students",
            get(list_students_handler).post(submit_students_handler),
        )
        .route(
            "/courses",
            get(list_courses_handler).post(submit_courses_handler),
        )
        .route(
            "/enrollments",
            get(list_enrollments_handler).post(submit_enrollments_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
