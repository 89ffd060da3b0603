pub mod forms;
pub mod gender;

pub use forms::{
    Action, CourseCommand, CourseForm, EnrollmentCommand, EnrollmentForm, StudentCommand,
    StudentForm,
};
pub use gender::Gender;
