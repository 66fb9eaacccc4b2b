//! Professor model.

use serde::Serialize;

use super::{CourseRef, LessonRef, Person, PersonInfo};

/// A professor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Professor {
    /// Identity fields.
    pub person: PersonInfo,
    /// Unique employee identifier.
    pub employee_id: String,
    /// Courses taught.
    pub courses: Vec<CourseRef>,
    /// Lessons given.
    pub lessons: Vec<LessonRef>,
}

impl Professor {
    /// Creates a professor with no courses or lessons.
    pub fn new(employee_id: impl Into<String>, person: PersonInfo) -> Self {
        Self {
            person,
            employee_id: employee_id.into(),
            courses: Vec::new(),
            lessons: Vec::new(),
        }
    }

    /// Whether the professor teaches `course`.
    pub fn teaches(&self, course: CourseRef) -> bool {
        self.courses.contains(&course)
    }
}

impl Person for Professor {
    fn person(&self) -> &PersonInfo {
        &self.person
    }
}
