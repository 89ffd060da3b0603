use sqlx::SqliteConnection;
use tracing::info;

use crate::db::models::{Student, StudentFields, StudentId};
use crate::error::RegistryError;

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Student>, RegistryError> {
    let rows = sqlx::query_as::<_, Student>(
        r#"SELECT student_id, name, age, gender, department, email, phone
           FROM student ORDER BY student_id"#,
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn insert(
    conn: &mut SqliteConnection,
    fields: StudentFields,
) -> Result<StudentId, RegistryError> {
    let id = sqlx::query(
        r#"INSERT INTO student (name, age, gender, department, email, phone)
           VALUES (?, ?, ?, ?, ?, ?)"#,
    )
    .bind(fields.name)
    .bind(fields.age)
    .bind(fields.gender)
    .bind(fields.department)
    .bind(fields.email)
    .bind(fields.phone)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();
    info!(student_id = id, "student added");
    Ok(id)
}

/// Overwrite every column of the student. Returns the number of rows touched (0 or 1).
pub async fn update(
    conn: &mut SqliteConnection,
    id: StudentId,
    fields: StudentFields,
) -> Result<u64, RegistryError> {
    let rows = sqlx::query(
        r#"UPDATE student SET
            name = ?,
            age = ?,
            gender = ?,
            department = ?,
            email = ?,
            phone = ?
          WHERE student_id = ?"#,
    )
    .bind(fields.name)
    .bind(fields.age)
    .bind(fields.gender)
    .bind(fields.department)
    .bind(fields.email)
    .bind(fields.phone)
    .bind(id)
    .execute(&mut *conn)
    .await?
    .rows_affected();
    info!(student_id = id, rows, "student updated");
    Ok(rows)
}

/// Enrollments of the student go with it (ON DELETE CASCADE).
pub async fn delete(conn: &mut SqliteConnection, id: StudentId) -> Result<u64, RegistryError> {
    let rows = sqlx::query("DELETE FROM student WHERE student_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    info!(student_id = id, rows, "student deleted");
    Ok(rows)
}
