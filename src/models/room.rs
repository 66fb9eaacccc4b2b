//! Room model.

use serde::Serialize;

use super::LessonRef;

/// A lecture room.
///
/// `capacity` is informational only: it is never checked against the
/// number of lessons or students.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    /// Unique room number.
    pub room_number: String,
    /// Seats available.
    pub capacity: u32,
    /// Lessons held here, deduplicated.
    pub lessons: Vec<LessonRef>,
}

impl Room {
    /// Creates a room with no lessons.
    pub fn new(room_number: impl Into<String>, capacity: u32) -> Self {
        Self {
            room_number: room_number.into(),
            capacity,
            lessons: Vec::new(),
        }
    }
}
