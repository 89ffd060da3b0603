//! Form bodies posted by the management pages and their conversion into commands.
//!
//! Every field arrives as an optional string so that a missing or blank field
//! becomes a precise [`RegistryError`] instead of a generic extractor rejection.

use serde::Deserialize;
use tracing::warn;

use crate::db::models::{
    CourseFields, CourseId, EnrollId, NewEnrollment, StudentFields, StudentId,
};
use crate::error::RegistryError;

/// The operation requested by a POST submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Update,
    Delete,
}

impl Action {
    /// `Ok(None)` for an unrecognised action value; the caller just re-renders the list.
    fn from_form(action: Option<String>) -> Result<Option<Self>, RegistryError> {
        let action = action.ok_or(RegistryError::MissingField("action"))?;
        let parsed = match action.as_str() {
            "Add" => Some(Action::Add),
            "Update" => Some(Action::Update),
            "Delete" => Some(Action::Delete),
            other => {
                warn!(action = other, "ignoring unknown form action");
                None
            }
        };
        Ok(parsed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StudentCommand {
    Add(StudentFields),
    Update(StudentId, StudentFields),
    Delete(StudentId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CourseCommand {
    Add(CourseFields),
    Update(CourseId, CourseFields),
    Delete(CourseId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnrollmentCommand {
    Add(NewEnrollment),
    UpdateMarks(EnrollId, Option<i64>),
    Delete(EnrollId),
}

#[derive(Debug, Default, Deserialize)]
pub struct StudentForm {
    pub action: Option<String>,
    pub student_id: Option<String>,
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CourseForm {
    pub action: Option<String>,
    pub course_id: Option<String>,
    pub course_name: Option<String>,
    pub credits: Option<String>,
    pub department: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EnrollmentForm {
    pub action: Option<String>,
    pub enroll_id: Option<String>,
    pub student_id: Option<String>,
    pub course_id: Option<String>,
    pub marks: Option<String>,
}

impl StudentForm {
    pub fn into_command(self) -> Result<Option<StudentCommand>, RegistryError> {
        let Some(action) = Action::from_form(self.action.clone())? else {
            return Ok(None);
        };
        let cmd = match action {
            Action::Add => StudentCommand::Add(self.fields()?),
            Action::Update => {
                let id = required_int("student_id", self.student_id.as_deref())?;
                StudentCommand::Update(id, self.fields()?)
            }
            Action::Delete => {
                StudentCommand::Delete(required_int("student_id", self.student_id.as_deref())?)
            }
        };
        Ok(Some(cmd))
    }

    fn fields(self) -> Result<StudentFields, RegistryError> {
        Ok(StudentFields {
            name: required_text("name", self.name)?,
            age: optional_int("age", self.age.as_deref())?,
            gender: required_text("gender", self.gender)?.parse()?,
            department: optional_text(self.department),
            email: optional_text(self.email),
            phone: optional_text(self.phone),
        })
    }
}

impl CourseForm {
    pub fn into_command(self) -> Result<Option<CourseCommand>, RegistryError> {
        let Some(action) = Action::from_form(self.action.clone())? else {
            return Ok(None);
        };
        let cmd = match action {
            Action::Add => CourseCommand::Add(self.fields()?),
            Action::Update => {
                let id = required_int("course_id", self.course_id.as_deref())?;
                CourseCommand::Update(id, self.fields()?)
            }
            Action::Delete => {
                CourseCommand::Delete(required_int("course_id", self.course_id.as_deref())?)
            }
        };
        Ok(Some(cmd))
    }

    fn fields(self) -> Result<CourseFields, RegistryError> {
        Ok(CourseFields {
            course_name: required_text("course_name", self.course_name)?,
            credits: optional_int("credits", self.credits.as_deref())?.unwrap_or(0),
            department: optional_text(self.department),
            description: optional_text(self.description),
        })
    }
}

impl EnrollmentForm {
    pub fn into_command(self) -> Result<Option<EnrollmentCommand>, RegistryError> {
        let Some(action) = Action::from_form(self.action)? else {
            return Ok(None);
        };
        let cmd = match action {
            Action::Add => EnrollmentCommand::Add(NewEnrollment {
                student_id: required_int("student_id", self.student_id.as_deref())?,
                course_id: required_int("course_id", self.course_id.as_deref())?,
                marks: optional_int("marks", self.marks.as_deref())?,
            }),
            // Student and course references are fixed once enrolled.
            Action::Update => EnrollmentCommand::UpdateMarks(
                required_int("enroll_id", self.enroll_id.as_deref())?,
                optional_int("marks", self.marks.as_deref())?,
            ),
            Action::Delete => {
                EnrollmentCommand::Delete(required_int("enroll_id", self.enroll_id.as_deref())?)
            }
        };
        Ok(Some(cmd))
    }
}

/// Blank (empty or whitespace-only) becomes `None`; anything else is kept verbatim.
fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, RegistryError> {
    optional_text(value).ok_or(RegistryError::MissingField(field))
}

fn optional_int(field: &'static str, value: Option<&str>) -> Result<Option<i64>, RegistryError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| RegistryError::invalid(field, v)),
        None => Ok(None),
    }
}

fn required_int(field: &'static str, value: Option<&str>) -> Result<i64, RegistryError> {
    optional_int(field, value)?.ok_or(RegistryError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gender;

    fn student(action: &str) -> StudentForm {
        StudentForm {
            action: Some(action.to_string()),
            name: Some("Ada".to_string()),
            gender: Some("Female".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn blank_optional_fields_become_null() {
        let mut form = student("Add");
        form.age = Some(String::new());
        form.email = Some("   ".to_string());

        let cmd = form.into_command().unwrap();
        assert_eq!(
            cmd,
            Some(StudentCommand::Add(StudentFields {
                name: "Ada".to_string(),
                age: None,
                gender: Gender::Female,
                department: None,
                email: None,
                phone: None,
            }))
        );
    }

    #[test]
    fn non_blank_text_is_kept_verbatim() {
        let mut form = student("Add");
        form.name = Some(" Ada ".to_string());
        form.phone = Some(" 555 ".to_string());

        match form.into_command().unwrap() {
            Some(StudentCommand::Add(fields)) => {
                assert_eq!(fields.name, " Ada ");
                assert_eq!(fields.phone.as_deref(), Some(" 555 "));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn missing_action_is_rejected() {
        let form = StudentForm::default();
        assert!(matches!(
            form.into_command(),
            Err(RegistryError::MissingField("action"))
        ));
    }

    #[test]
    fn unknown_action_is_ignored() {
        assert_eq!(student("Archive").into_command().unwrap(), None);
    }

    #[test]
    fn update_requires_student_id() {
        assert!(matches!(
            student("Update").into_command(),
            Err(RegistryError::MissingField("student_id"))
        ));
    }

    #[test]
    fn delete_needs_only_the_id() {
        let form = StudentForm {
            action: Some("Delete".to_string()),
            student_id: Some("7".to_string()),
            ..Default::default()
        };
        assert_eq!(form.into_command().unwrap(), Some(StudentCommand::Delete(7)));
    }

    #[test]
    fn unknown_gender_is_invalid() {
        let mut form = student("Add");
        form.gender = Some("Robot".to_string());
        assert!(matches!(
            form.into_command(),
            Err(RegistryError::InvalidField { field: "gender", .. })
        ));
    }

    #[test]
    fn non_numeric_age_is_invalid() {
        let mut form = student("Add");
        form.age = Some("twenty".to_string());
        assert!(matches!(
            form.into_command(),
            Err(RegistryError::InvalidField { field: "age", .. })
        ));
    }

    #[test]
    fn blank_credits_default_to_zero() {
        let form = CourseForm {
            action: Some("Add".to_string()),
            course_name: Some("Algorithms".to_string()),
            credits: Some(String::new()),
            ..Default::default()
        };
        match form.into_command().unwrap() {
            Some(CourseCommand::Add(fields)) => assert_eq!(fields.credits, 0),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn enrollment_update_carries_marks_only() {
        let form = EnrollmentForm {
            action: Some("Update".to_string()),
            enroll_id: Some("3".to_string()),
            student_id: Some("99".to_string()),
            marks: Some("88".to_string()),
            ..Default::default()
        };
        assert_eq!(
            form.into_command().unwrap(),
            Some(EnrollmentCommand::UpdateMarks(3, Some(88)))
        );
    }

    #[test]
    fn enrollment_add_requires_course() {
        let form = EnrollmentForm {
            action: Some("Add".to_string()),
            student_id: Some("1".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            form.into_command(),
            Err(RegistryError::MissingField("course_id"))
        ));
    }
}
