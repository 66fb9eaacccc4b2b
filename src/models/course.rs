//! Course model.

use serde::Serialize;

use super::{EnrollmentRef, FacultyRef, ProfessorRef, StudentRef};

/// A course offered by a faculty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    /// Unique course code (e.g. `"09.03.03"`).
    pub course_code: String,
    /// Human-readable title.
    pub title: String,
    /// Credit value.
    pub credits: u32,
    /// Current professor. Reassignment replaces it.
    pub professor: Option<ProfessorRef>,
    /// Students attending, deduplicated.
    pub students: Vec<StudentRef>,
    /// Owning faculty.
    pub faculty: Option<FacultyRef>,
    /// Enrollments recorded against this course.
    pub enrollments: Vec<EnrollmentRef>,
}

impl Course {
    /// Creates a course with no professor, faculty, or students.
    pub fn new(course_code: impl Into<String>, title: impl Into<String>, credits: u32) -> Self {
        Self {
            course_code: course_code.into(),
            title: title.into(),
            credits,
            professor: None,
            students: Vec::new(),
            faculty: None,
            enrollments: Vec::new(),
        }
    }

    /// Whether `student` is in the course's student list.
    pub fn has_student(&self, student: StudentRef) -> bool {
        self.students.contains(&student)
    }

    /// Number of students attending.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_new() {
        let c = Course::new("09.03.03", "Introduction to Programming", 5);
        assert_eq!(c.course_code, "09.03.03");
        assert_eq!(c.credits, 5);
        assert!(c.professor.is_none());
        assert!(c.faculty.is_none());
        assert_eq!(c.student_count(), 0);
    }
}
