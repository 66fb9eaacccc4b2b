//! JSON roster codec.
//!
//! The document is an array of student objects:
//!
//! ```json
//! [{
//!   "student_id": "124017", "first_name": "Sabina", "last_name": "Babaeva",
//!   "birth_date": "2005-03-22",
//!   "enrollments": [{"course_code": "09.03.03",
//!                    "enrollment_date": "2025-09-01T10:20:00", "grade": 48}],
//!   "groups": ["ИДБ-24-11"]
//! }]
//! ```
//!
//! Output is pretty-printed with two-space indentation and keeps non-ASCII
//! text unescaped.

use serde::Deserialize;
use serde_json::Value;

use super::record::{EnrollmentRecord, StudentRecord};
use crate::error::CodecError;

/// Wire shape of a student on decode. `enrollments` and `groups` may be
/// omitted.
#[derive(Deserialize)]
struct JsonStudent {
    student_id: String,
    first_name: String,
    last_name: String,
    birth_date: String,
    #[serde(default)]
    enrollments: Vec<JsonEnrollment>,
    #[serde(default)]
    groups: Vec<String>,
}

/// Wire shape of an enrollment on decode. The grade is kept raw so a
/// non-integer value is reported as a format error rather than a
/// structural one.
#[derive(Deserialize)]
struct JsonEnrollment {
    course_code: String,
    enrollment_date: String,
    #[serde(default)]
    grade: Option<Value>,
}

pub(crate) fn encode(records: &[StudentRecord]) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub(crate) fn decode(text: &str) -> Result<Vec<StudentRecord>, CodecError> {
    let raw: Vec<JsonStudent> = serde_json::from_str(text)?;
    raw.into_iter().map(into_record).collect()
}

fn into_record(s: JsonStudent) -> Result<StudentRecord, CodecError> {
    let enrollments = s
        .enrollments
        .into_iter()
        .map(|e| {
            Ok(EnrollmentRecord {
                grade: parse_grade(e.grade)?,
                course_code: e.course_code,
                enrollment_date: e.enrollment_date,
            })
        })
        .collect::<Result<Vec<_>, CodecError>>()?;

    Ok(StudentRecord {
        student_id: s.student_id,
        first_name: s.first_name,
        last_name: s.last_name,
        birth_date: s.birth_date,
        enrollments,
        groups: s.groups,
    })
}

/// Accepts an integer, an integral float, or a numeric string.
fn parse_grade(value: Option<Value>) -> Result<Option<i32>, CodecError> {
    let invalid = |v: &Value| CodecError::Format(format!("invalid grade {v}"));
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).map(Some).map_err(|_| invalid(&Value::Number(n)))
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => Ok(Some(f as i32)),
                    _ => Err(invalid(&Value::Number(n))),
                }
            }
        }
        Some(Value::String(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| invalid(&Value::String(s))),
        Some(other) => Err(invalid(&other)),
    }
}
