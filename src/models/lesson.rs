//! Lesson model.

use serde::Serialize;

use super::{CourseRef, ProfessorRef, RoomRef};

/// A single timetabled lesson.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lesson {
    /// Start time of day (e.g. `"10:20"`).
    pub lesson_time: String,
    /// Duration in minutes.
    pub duration_minutes: u32,
    pub professor: Option<ProfessorRef>,
    pub room: Option<RoomRef>,
    pub course: Option<CourseRef>,
}

impl Lesson {
    /// Creates an unassigned lesson.
    pub fn new(lesson_time: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            lesson_time: lesson_time.into(),
            duration_minutes,
            professor: None,
            room: None,
            course: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_new() {
        let l = Lesson::new("10:20", 90);
        assert_eq!(l.lesson_time, "10:20");
        assert_eq!(l.duration_minutes, 90);
        assert!(l.professor.is_none() && l.room.is_none() && l.course.is_none());
    }
}
