use axum::{
    Form,
    extract::State,
    response::Html,
};

use crate::db::{Course, RequestConnection, Student, courses, enrollments, students};
use crate::error::RegistryError;
use crate::render;
use crate::router::RegistryState;
use crate::types::{EnrollmentCommand, EnrollmentForm};

/// GET /enrollments
pub async fn list_enrollments_handler(
    State(state): State<RegistryState>,
) -> Result<Html<String>, RegistryError> {
    let mut conn = state.storage.acquire().await?;
    let student_rows = students::list(&mut conn).await?;
    let course_rows = courses::list(&mut conn).await?;
    render_page(&mut conn, &student_rows, &course_rows).await
}

/// POST /enrollments. Student and course lists are read before the write; they
/// only feed the selection dropdowns, which an enrollment write cannot change.
pub async fn submit_enrollments_handler(
    State(state): State<RegistryState>,
    Form(form): Form<EnrollmentForm>,
) -> Result<Html<String>, RegistryError> {
    let command = form.into_command()?;
    let mut conn = state.storage.acquire().await?;
    let student_rows = students::list(&mut conn).await?;
    let course_rows = courses::list(&mut conn).await?;

    match command {
        Some(EnrollmentCommand::Add(new)) => {
            enrollments::insert(&mut conn, new).await?;
        }
        Some(EnrollmentCommand::UpdateMarks(id, marks)) => {
            enrollments::update_marks(&mut conn, id, marks).await?;
        }
        Some(EnrollmentCommand::Delete(id)) => {
            enrollments::delete(&mut conn, id).await?;
        }
        None => {}
    }

    render_page(&mut conn, &student_rows, &course_rows).await
}

async fn render_page(
    conn: &mut RequestConnection,
    student_rows: &[Student],
    course_rows: &[Course],
) -> Result<Html<String>, RegistryError> {
    let rows = enrollments::list(conn).await?;
    Ok(Html(render::enrollments_page(&rows, student_rows, course_rows)))
}
