use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::info;

use crate::db::models::{EnrollId, EnrollmentListing, NewEnrollment};
use crate::error::RegistryError;

/// Join each enrollment with the current student and course names.
pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<EnrollmentListing>, RegistryError> {
    let rows = sqlx::query_as::<_, EnrollmentListing>(
        r#"SELECT e.enroll_id, s.name AS student_name, c.course_name, e.marks, e.enrolled_on
           FROM enrollment e
           JOIN student s ON e.student_id = s.student_id
           JOIN course c ON e.course_id = c.course_id
           ORDER BY e.enroll_id"#,
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

/// Referential integrity is left to the foreign keys; a dangling reference
/// surfaces as a constraint violation.
pub async fn insert(
    conn: &mut SqliteConnection,
    new: NewEnrollment,
) -> Result<EnrollId, RegistryError> {
    let id = sqlx::query(
        r#"INSERT INTO enrollment (student_id, course_id, marks, enrolled_on)
           VALUES (?, ?, ?, ?)"#,
    )
    .bind(new.student_id)
    .bind(new.course_id)
    .bind(new.marks)
    .bind(Utc::now())
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();
    info!(
        enroll_id = id,
        student_id = new.student_id,
        course_id = new.course_id,
        "enrollment added"
    );
    Ok(id)
}

pub async fn update_marks(
    conn: &mut SqliteConnection,
    id: EnrollId,
    marks: Option<i64>,
) -> Result<u64, RegistryError> {
    let rows = sqlx::query("UPDATE enrollment SET marks = ? WHERE enroll_id = ?")
        .bind(marks)
        .bind(id)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    info!(enroll_id = id, rows, "enrollment marks updated");
    Ok(rows)
}

pub async fn delete(conn: &mut SqliteConnection, id: EnrollId) -> Result<u64, RegistryError> {
    let rows = sqlx::query("DELETE FROM enrollment WHERE enroll_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    info!(enroll_id = id, rows, "enrollment deleted");
    Ok(rows)
}
