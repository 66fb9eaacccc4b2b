//! Study group model.

use serde::Serialize;

use super::{ScheduleRef, StudentRef};

/// A study group (e.g. `"ИДБ-24-11"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    /// Group name.
    pub group_name: String,
    /// Members, deduplicated.
    pub students: Vec<StudentRef>,
    /// Timetable this group follows.
    pub schedule: Option<ScheduleRef>,
}

impl Group {
    /// Creates an empty group.
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            students: Vec::new(),
            schedule: None,
        }
    }

    /// Whether `student` is a member.
    pub fn has_student(&self, student: StudentRef) -> bool {
        self.students.contains(&student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_new() {
        let g = Group::new("ИДБ-24-11");
        assert_eq!(g.group_name, "ИДБ-24-11");
        assert!(g.students.is_empty());
        assert!(g.schedule.is_none());
    }
}
