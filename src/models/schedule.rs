//! Schedule model.
//!
//! A schedule aggregates the groups, professors, rooms, and lessons that make
//! up one timetable. Every list is deduplicated. Lesson lookups by group,
//! professor, or room live on [`University`](crate::University) because they
//! need to follow the lesson's own links.

use serde::Serialize;

use super::handle::push_unique;
use super::{GroupRef, LessonRef, ProfessorRef, RoomRef};

/// A timetable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schedule {
    pub groups: Vec<GroupRef>,
    pub professors: Vec<ProfessorRef>,
    pub rooms: Vec<RoomRef>,
    pub lessons: Vec<LessonRef>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a professor. Duplicates are ignored.
    pub fn add_professor(&mut self, professor: ProfessorRef) -> bool {
        push_unique(&mut self.professors, professor)
    }

    /// Adds a room. Duplicates are ignored.
    pub fn add_room(&mut self, room: RoomRef) -> bool {
        push_unique(&mut self.rooms, room)
    }

    /// Adds a lesson. Duplicates are ignored.
    pub fn add_lesson(&mut self, lesson: LessonRef) -> bool {
        push_unique(&mut self.lessons, lesson)
    }

    /// Whether `group` follows this schedule.
    pub fn has_group(&self, group: GroupRef) -> bool {
        self.groups.contains(&group)
    }

    /// Number of lessons.
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert_eq!(s.lesson_count(), 0);
        assert!(!s.has_group(GroupRef(0)));
    }

    #[test]
    fn test_add_is_deduplicated() {
        let mut s = Schedule::new();
        assert!(s.add_lesson(LessonRef(0)));
        assert!(!s.add_lesson(LessonRef(0)));
        assert!(s.add_room(RoomRef(1)));
        assert!(!s.add_room(RoomRef(1)));
        assert!(s.add_professor(ProfessorRef(2)));
        assert!(!s.add_professor(ProfessorRef(2)));
        assert_eq!(s.lesson_count(), 1);
        assert_eq!(s.rooms.len(), 1);
        assert_eq!(s.professors.len(), 1);
    }
}
