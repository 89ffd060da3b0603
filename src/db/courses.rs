use sqlx::SqliteConnection;
use tracing::info;

use crate::db::models::{Course, CourseFields, CourseId};
use crate::error::RegistryError;

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Course>, RegistryError> {
    let rows = sqlx::query_as::<_, Course>(
        r#"SELECT course_id, course_name, credits, department, description
           FROM course ORDER BY course_id"#,
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn insert(
    conn: &mut SqliteConnection,
    fields: CourseFields,
) -> Result<CourseId, RegistryError> {
    let id = sqlx::query(
        r#"INSERT INTO course (course_name, credits, department, description)
           VALUES (?, ?, ?, ?)"#,
    )
    .bind(fields.course_name)
    .bind(fields.credits)
    .bind(fields.department)
    .bind(fields.description)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();
    info!(course_id = id, "course added");
    Ok(id)
}

pub async fn update(
    conn: &mut SqliteConnection,
    id: CourseId,
    fields: CourseFields,
) -> Result<u64, RegistryError> {
    let rows = sqlx::query(
        r#"UPDATE course SET
            course_name = ?,
            credits = ?,
            department = ?,
            description = ?
          WHERE course_id = ?"#,
    )
    .bind(fields.course_name)
    .bind(fields.credits)
    .bind(fields.department)
    .bind(fields.description)
    .bind(id)
    .execute(&mut *conn)
    .await?
    .rows_affected();
    info!(course_id = id, rows, "course updated");
    Ok(rows)
}

pub async fn delete(conn: &mut SqliteConnection, id: CourseId) -> Result<u64, RegistryError> {
    let rows = sqlx::query("DELETE FROM course WHERE course_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    info!(course_id = id, rows, "course deleted");
    Ok(rows)
}
