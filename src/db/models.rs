use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::types::Gender;

pub type StudentId = i64;
pub type CourseId = i64;
pub type EnrollId = i64;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Student {
    pub student_id: StudentId,
    pub name: String,
    pub age: Option<i64>,
    pub gender: Gender,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Field values submitted for an Add or an Update; updates overwrite every column.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentFields {
    pub name: String,
    pub age: Option<i64>,
    pub gender: Gender,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Course {
    pub course_id: CourseId,
    pub course_name: String,
    pub credits: i64,
    pub department: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseFields {
    pub course_name: String,
    pub credits: i64,
    pub department: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEnrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub marks: Option<i64>,
}

/// Enrollment joined with the current names of its student and course.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EnrollmentListing {
    pub enroll_id: EnrollId,
    pub student_name: String,
    pub course_name: String,
    pub marks: Option<i64>,
    pub enrolled_on: DateTime<Utc>,
}
