//! SQL DDL for the registry database.
//! Executed statement by statement at startup and exported verbatim as the schema file.

/// SQLite schema with:
/// - `student`: `email` UNIQUE (NULLs may repeat), `gender` limited by CHECK
/// - `course`: `credits` NOT NULL DEFAULT 0
/// - `enrollment`: both references `ON DELETE CASCADE`
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS student (
    student_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NULL,
    gender TEXT NOT NULL CHECK (gender IN ('Male', 'Female', 'Other')),
    department TEXT NULL,
    email TEXT NULL UNIQUE,
    phone TEXT NULL
);

CREATE TABLE IF NOT EXISTS course (
    course_id INTEGER PRIMARY KEY AUTOINCREMENT,
    course_name TEXT NOT NULL,
    credits INTEGER NOT NULL DEFAULT 0,
    department TEXT NULL,
    description TEXT NULL
);

CREATE TABLE IF NOT EXISTS enrollment (
    enroll_id INTEGER PRIMARY KEY AUTOINCREMENT,
    student_id INTEGER NOT NULL,
    course_id INTEGER NOT NULL,
    marks INTEGER NULL,
    enrolled_on TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (student_id) REFERENCES student(student_id) ON DELETE CASCADE,
    FOREIGN KEY (course_id) REFERENCES course(course_id) ON DELETE CASCADE
);
"#;

/// Split the bundled DDL into individual statements (sqlx runs one per query).
pub fn statements() -> impl Iterator<Item = &'static str> {
    SQLITE_INIT
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_three_tables() {
        let stmts: Vec<_> = statements().collect();
        assert_eq!(stmts.len(), 3);
        assert!(stmts.iter().all(|s| s.starts_with("CREATE TABLE IF NOT EXISTS")));
    }
}
