use axum::{
    Form,
    extract::State,
    response::Html,
};

use crate::db::{RequestConnection, courses};
use crate::error::RegistryError;
use crate::render;
use crate::router::RegistryState;
use crate::types::{CourseCommand, CourseForm};

/// GET /courses
pub async fn list_courses_handler(
    State(state): State<RegistryState>,
) -> Result<Html<String>, RegistryError> {
    let mut conn = state.storage.acquire().await?;
    render_page(&mut conn).await
}

/// POST /courses
pub async fn submit_courses_handler(
    State(state): State<RegistryState>,
    Form(form): Form<CourseForm>,
) -> Result<Html<String>, RegistryError> {
    let command = form.into_command()?;
    let mut conn = state.storage.acquire().await?;

    match command {
        Some(CourseCommand::Add(fields)) => {
            courses::insert(&mut conn, fields).await?;
        }
        Some(CourseCommand::Update(id, fields)) => {
            courses::update(&mut conn, id, fields).await?;
        }
        Some(CourseCommand::Delete(id)) => {
            courses::delete(&mut conn, id).await?;
        }
        None => {}
    }

    render_page(&mut conn).await
}

async fn render_page(conn: &mut RequestConnection) -> Result<Html<String>, RegistryError> {
    let rows = courses::list(conn).await?;
    Ok(Html(render::courses_page(&rows)))
}
