//! Enrollment model.
//!
//! An enrollment links exactly one student to one course and carries the
//! enrollment timestamp and an optional grade.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;

use super::{CourseRef, StudentRef};
use crate::error::Result;
use crate::validation::validate_grade;

/// A student's enrollment in a course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enrollment {
    /// Enrolled student.
    pub student: StudentRef,
    /// Course enrolled in.
    pub course: CourseRef,
    /// When the enrollment was recorded (local time, microsecond precision).
    pub enrollment_date: NaiveDateTime,
    /// Grade, if one has been set.
    pub grade: Option<i32>,
}

impl Enrollment {
    /// Creates an enrollment timestamped now, with no grade.
    pub fn new(student: StudentRef, course: CourseRef) -> Self {
        Self::at(student, course, now_micros())
    }

    /// Creates an enrollment with an explicit timestamp.
    pub fn at(student: StudentRef, course: CourseRef, enrollment_date: NaiveDateTime) -> Self {
        Self {
            student,
            course,
            enrollment_date,
            grade: None,
        }
    }

    /// Sets the grade.
    ///
    /// # Errors
    /// [`InvalidGrade`](crate::UniversityError::InvalidGrade) if `grade` is
    /// outside `0..=54`; the previous grade is kept.
    pub fn set_grade(&mut self, grade: i32) -> Result<()> {
        self.grade = Some(validate_grade(grade)?);
        Ok(())
    }

    /// Whether a grade has been set.
    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}

fn now_micros() -> NaiveDateTime {
    let now = Local::now().naive_local();
    let micros = now.nanosecond() / 1_000 * 1_000;
    now.with_nanosecond(micros).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UniversityError;

    #[test]
    fn test_set_grade_bounds() {
        let mut e = Enrollment::new(StudentRef(0), CourseRef(0));
        assert!(!e.is_graded());

        assert!(e.set_grade(0).is_ok());
        assert_eq!(e.grade, Some(0));
        assert!(e.set_grade(54).is_ok());
        assert_eq!(e.grade, Some(54));
    }

    #[test]
    fn test_set_grade_rejects_out_of_range() {
        let mut e = Enrollment::new(StudentRef(0), CourseRef(0));
        e.set_grade(48).unwrap();

        for bad in [-1, 55, 150] {
            let err = e.set_grade(bad).unwrap_err();
            assert!(matches!(err, UniversityError::InvalidGrade { grade, .. } if grade == bad));
            assert_eq!(e.grade, Some(48));
        }
    }

    #[test]
    fn test_timestamp_has_microsecond_precision() {
        let e = Enrollment::new(StudentRef(0), CourseRef(0));
        assert_eq!(e.enrollment_date.nanosecond() % 1_000, 0);
    }
}
