//! Typed arena handles.
//!
//! Entities never own each other. Every cross-entity link is a copyable
//! handle into the [`University`](crate::University) arena that minted it.
//! Handles serialize as their index but cannot be deserialized, so every
//! handle in existence came from an arena.

use serde::Serialize;
use std::fmt;

macro_rules! define_ref {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Position of the entity in its arena.
            #[inline]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $label, self.0)
            }
        }
    };
}

define_ref!(
    /// Handle to a [`Student`](super::Student).
    StudentRef,
    "student"
);
define_ref!(
    /// Handle to a [`Professor`](super::Professor).
    ProfessorRef,
    "professor"
);
define_ref!(
    /// Handle to a [`Course`](super::Course).
    CourseRef,
    "course"
);
define_ref!(
    /// Handle to an [`Enrollment`](super::Enrollment).
    EnrollmentRef,
    "enrollment"
);
define_ref!(
    /// Handle to a [`Group`](super::Group).
    GroupRef,
    "group"
);
define_ref!(
    /// Handle to a [`Department`](super::Department).
    DepartmentRef,
    "department"
);
define_ref!(
    /// Handle to a [`Faculty`](super::Faculty).
    FacultyRef,
    "faculty"
);
define_ref!(
    /// Handle to a [`Room`](super::Room).
    RoomRef,
    "room"
);
define_ref!(
    /// Handle to a [`Lesson`](super::Lesson).
    LessonRef,
    "lesson"
);
define_ref!(
    /// Handle to a [`Schedule`](super::Schedule).
    ScheduleRef,
    "schedule"
);

/// Appends `item` unless already present. Returns whether it was appended.
pub(crate) fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: T) -> bool {
    if list.contains(&item) {
        false
    } else {
        list.push(item);
        true
    }
}
