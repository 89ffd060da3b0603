use axum::{
    Form,
    extract::State,
    response::Html,
};

use crate::db::{RequestConnection, students};
use crate::error::RegistryError;
use crate::render;
use crate::router::RegistryState;
use crate::types::{StudentCommand, StudentForm};

/// GET /students
pub async fn list_students_handler(
    State(state): State<RegistryState>,
) -> Result<Html<String>, RegistryError> {
    let mut conn = state.storage.acquire().await?;
    render_page(&mut conn).await
}

/// POST /students -> Add, Update or Delete, then the refreshed list.
pub async fn submit_students_handler(
    State(state): State<RegistryState>,
    Form(form): Form<StudentForm>,
) -> Result<Html<String>, RegistryError> {
    let command = form.into_command()?;
    let mut conn = state.storage.acquire().await?;

    match command {
        Some(StudentCommand::Add(fields)) => {
            students::insert(&mut conn, fields).await?;
        }
        Some(StudentCommand::Update(id, fields)) => {
            students::update(&mut conn, id, fields).await?;
        }
        Some(StudentCommand::Delete(id)) => {
            students::delete(&mut conn, id).await?;
        }
        None => {}
    }

    render_page(&mut conn).await
}

async fn render_page(conn: &mut RequestConnection) -> Result<Html<String>, RegistryError> {
    let rows = students::list(conn).await?;
    Ok(Html(render::students_page(&rows)))
}
