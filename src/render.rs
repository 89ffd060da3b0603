//! HTML pages built from the templates compiled into the binary.
//!
//! Templates carry `{{ slot }}` markers that are replaced with pre-rendered,
//! escaped fragments. Nothing is read from disk at request time.

use axum::http::StatusCode;
use std::fmt::Write;

use crate::db::models::{Course, EnrollmentListing, Student};
use crate::types::Gender;

pub const INDEX_HTML: &str = include_str!("../assets/templates/index.html");
pub const STUDENTS_HTML: &str = include_str!("../assets/templates/students.html");
pub const COURSES_HTML: &str = include_str!("../assets/templates/courses.html");
pub const ENROLLMENTS_HTML: &str = include_str!("../assets/templates/enrollments.html");
pub const ERROR_HTML: &str = include_str!("../assets/templates/error.html");

/// File names the templates are exported under, paired with their contents.
pub const TEMPLATES: [(&str, &str); 4] = [
    ("index.html", INDEX_HTML),
    ("students.html", STUDENTS_HTML),
    ("courses.html", COURSES_HTML),
    ("enrollments.html", ENROLLMENTS_HTML),
];

const ENROLLED_ON_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn index_page() -> String {
    INDEX_HTML.to_string()
}

pub fn students_page(students: &[Student]) -> String {
    let mut rows = String::new();
    for s in students {
        let age = opt_int(s.age);
        let cells = [
            s.student_id.to_string(),
            s.name.clone(),
            age.clone(),
            s.gender.to_string(),
            opt_text(&s.department),
            opt_text(&s.email),
            opt_text(&s.phone),
        ];
        let data = [
            ("student_id", s.student_id.to_string()),
            ("name", s.name.clone()),
            ("age", age),
            ("gender", s.gender.to_string()),
            ("department", opt_text(&s.department)),
            ("email", opt_text(&s.email)),
            ("phone", opt_text(&s.phone)),
        ];
        push_row(
            &mut rows,
            &cells,
            &data,
            "editStudent",
            ("student_id", s.student_id, "student"),
        );
    }

    let gender_options: String = Gender::ALL
        .iter()
        .map(|g| option(g.as_str(), g.as_str()))
        .collect();

    fill(
        STUDENTS_HTML,
        &[("gender_options", &gender_options), ("rows", &rows)],
    )
}

pub fn courses_page(courses: &[Course]) -> String {
    let mut rows = String::new();
    for c in courses {
        let cells = [
            c.course_id.to_string(),
            c.course_name.clone(),
            c.credits.to_string(),
            opt_text(&c.department),
            opt_text(&c.description),
        ];
        let data = [
            ("course_id", c.course_id.to_string()),
            ("course_name", c.course_name.clone()),
            ("credits", c.credits.to_string()),
            ("department", opt_text(&c.department)),
            ("description", opt_text(&c.description)),
        ];
        push_row(
            &mut rows,
            &cells,
            &data,
            "editCourse",
            ("course_id", c.course_id, "course"),
        );
    }
    fill(COURSES_HTML, &[("rows", &rows)])
}

pub fn enrollments_page(
    enrollments: &[EnrollmentListing],
    students: &[Student],
    courses: &[Course],
) -> String {
    let mut rows = String::new();
    for e in enrollments {
        let marks = opt_int(e.marks);
        let cells = [
            e.enroll_id.to_string(),
            e.student_name.clone(),
            e.course_name.clone(),
            marks.clone(),
            e.enrolled_on.format(ENROLLED_ON_FORMAT).to_string(),
        ];
        let data = [("enroll_id", e.enroll_id.to_string()), ("marks", marks)];
        push_row(
            &mut rows,
            &cells,
            &data,
            "editEnrollment",
            ("enroll_id", e.enroll_id, "enrollment"),
        );
    }

    let student_options: String = students
        .iter()
        .map(|s| option(&s.student_id.to_string(), &s.name))
        .collect();
    let course_options: String = courses
        .iter()
        .map(|c| option(&c.course_id.to_string(), &c.course_name))
        .collect();

    fill(
        ENROLLMENTS_HTML,
        &[
            ("student_options", &student_options),
            ("course_options", &course_options),
            ("rows", &rows),
        ],
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    fill(
        ERROR_HTML,
        &[
            ("status", &escape_html(&status.to_string())),
            ("message", &escape_html(message)),
        ],
    )
}

/// Replace `{{ name }}` markers; values must already be safe HTML.
fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    slots.iter().fold(template.to_string(), |page, (name, html)| {
        page.replace(&format!("{{{{ {name} }}}}"), html)
    })
}

/// One table row: escaped cells, then an actions cell whose Edit button carries
/// the row values as `data-*` attributes and whose Delete button posts the id.
fn push_row(
    out: &mut String,
    cells: &[String],
    data: &[(&str, String)],
    edit_fn: &str,
    (id_field, id, label): (&str, i64, &str),
) {
    out.push_str("                    <tr>\n");
    for cell in cells {
        let _ = writeln!(out, "                        <td>{}</td>", escape_html(cell));
    }
    let attrs: String = data
        .iter()
        .map(|(k, v)| format!(" data-{k}=\"{}\"", escape_html(v)))
        .collect();
    let _ = writeln!(
        out,
        "                        <td class=\"actions\">\n\
         \x20                           <button class=\"edit-btn\"{attrs} onclick=\"{edit_fn}(this)\">Edit</button>\n\
         \x20                           <button class=\"delete-btn\" onclick=\"submitDelete('{id_field}', {id}, '{label}')\">Delete</button>\n\
         \x20                       </td>"
    );
    out.push_str("                    </tr>\n");
}

fn option(value: &str, label: &str) -> String {
    format!(
        "                            <option value=\"{}\">{}</option>\n",
        escape_html(value),
        escape_html(label)
    )
}

fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_int(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            // Keeps user text from forming `{{ slot }}` markers.
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}
