//! Format-neutral roster records.
//!
//! A [`StudentRecord`] is the denormalized view of one student that both the
//! JSON and the XML codec read and write: identity fields, each enrollment's
//! course code, date, and grade, and the names of the student's groups.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::CodecOptions;
use crate::error::CodecError;
use crate::models::{Course, Enrollment, Group, PersonInfo, Student, StudentRef};
use crate::validation::validate_grade;
use crate::University;

/// One student as stored in a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub enrollments: Vec<EnrollmentRecord>,
    pub groups: Vec<String>,
}

/// One enrollment as stored in a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub course_code: String,
    /// ISO-8601 timestamp.
    pub enrollment_date: String,
    pub grade: Option<i32>,
}

impl StudentRecord {
    /// Snapshots a student and everything reachable from it.
    pub fn from_student(university: &University, student: StudentRef) -> Self {
        let s = university.student(student);
        Self {
            student_id: s.student_id.clone(),
            first_name: s.person.name.clone(),
            last_name: s.person.surname.clone(),
            birth_date: s.person.birth_date.clone(),
            enrollments: s
                .enrollments
                .iter()
                .map(|&e| {
                    let e = university.enrollment(e);
                    EnrollmentRecord {
                        course_code: university.course(e.course).course_code.clone(),
                        enrollment_date: format_timestamp(&e.enrollment_date),
                        grade: e.grade,
                    }
                })
                .collect(),
            groups: s
                .groups
                .iter()
                .map(|&g| university.group(g).group_name.clone())
                .collect(),
        }
    }
}

/// Snapshots the given students in order.
pub fn encode_records(university: &University, students: &[StudentRef]) -> Vec<StudentRecord> {
    students
        .iter()
        .map(|&s| StudentRecord::from_student(university, s))
        .collect()
}

/// Rebuilds a fresh [`University`] from roster records.
///
/// Every group name becomes a new [`Group`] and every enrollment a new
/// [`Course`] carrying only its code, so equal names in different records
/// yield distinct entities. Duplicate-link checks are bypassed. Any bad
/// record fails the whole call.
pub fn decode_records(
    records: Vec<StudentRecord>,
    options: &CodecOptions,
) -> Result<University, CodecError> {
    let mut university = University::new();
    for record in records {
        decode_record(&mut university, record, options)?;
    }
    Ok(university)
}

fn decode_record(
    university: &mut University,
    record: StudentRecord,
    options: &CodecOptions,
) -> Result<StudentRef, CodecError> {
    let student = university.add_student(Student::new(
        record.student_id,
        PersonInfo::new(record.first_name, record.last_name, record.birth_date),
    ));

    for name in record.groups {
        let group = university.add_group(Group::new(name));
        university.group_add_student(group, student);
    }

    for en in record.enrollments {
        let date = parse_timestamp(&en.enrollment_date)?;
        let grade = match en.grade {
            Some(g) if options.validate_grades => Some(
                validate_grade(g).map_err(|err| CodecError::Format(err.to_string()))?,
            ),
            other => other,
        };
        let course = university.add_course(Course::new(
            en.course_code,
            options.placeholder_course_title.clone(),
            0,
        ));
        let mut enrollment = Enrollment::at(student, course, date);
        enrollment.grade = grade;
        university.insert_enrollment(enrollment);
        university.course_add_student(course, student);
    }

    Ok(student)
}

/// Formats a timestamp as ISO-8601, with microseconds only when non-zero.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    if ts.nanosecond() == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Parses an ISO-8601 timestamp.
///
/// Accepts `T` or space separators, optional seconds and fractions, an
/// optional UTC offset (the local wall-clock time is kept), and bare dates
/// (midnight).
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, CodecError> {
    let s = s.trim();
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts);
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.naive_local());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ts) = d.and_hms_opt(0, 0, 0) {
            return Ok(ts);
        }
    }
    Err(CodecError::Format(format!("invalid enrollment_date '{s}'")))
}
