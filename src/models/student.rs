//! Student model.

use serde::Serialize;

use super::{EnrollmentRef, GroupRef, Person, PersonInfo};

/// A student.
///
/// Enrollments are created only through
/// [`University::enroll_in_course`](crate::University::enroll_in_course)
/// (or by the roster decoders); groups are shared memberships.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    /// Identity fields.
    pub person: PersonInfo,
    /// Unique student identifier.
    pub student_id: String,
    /// Enrollments in insertion order.
    pub enrollments: Vec<EnrollmentRef>,
    /// Group memberships in insertion order.
    pub groups: Vec<GroupRef>,
}

impl Student {
    /// Creates a student with no enrollments or groups.
    pub fn new(student_id: impl Into<String>, person: PersonInfo) -> Self {
        Self {
            person,
            student_id: student_id.into(),
            enrollments: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Whether the student is a member of `group`.
    pub fn is_member_of(&self, group: GroupRef) -> bool {
        self.groups.contains(&group)
    }

    /// Number of enrollments.
    pub fn enrollment_count(&self) -> usize {
        self.enrollments.len()
    }
}

impl Person for Student {
    fn person(&self) -> &PersonInfo {
        &self.person
    }
}
