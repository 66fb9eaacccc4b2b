//! Error types for relationship mutators and roster codecs.

use thiserror::Error;

/// Result alias for university operations.
pub type Result<T, E = UniversityError> = std::result::Result<T, E>;

/// A rejected mutation on the object graph.
///
/// Every variant leaves the graph exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniversityError {
    /// Grade outside the accepted range.
    #[error("grade {grade} is out of range (expected {min}..={max})")]
    InvalidGrade { grade: i32, min: i32, max: i32 },

    /// The student already holds an enrollment for the course.
    #[error("student {student_id} is already enrolled in course {course_code}")]
    DuplicateEnrollment {
        student_id: String,
        course_code: String,
    },

    /// The student is already a member of the group.
    #[error("student {student_id} has already joined group {group_name}")]
    GroupAlreadyJoined {
        student_id: String,
        group_name: String,
    },

    /// The professor already teaches the course.
    #[error("professor {employee_id} is already assigned to course {course_code}")]
    ProfessorAlreadyAssigned {
        employee_id: String,
        course_code: String,
    },
}

/// A failure while reading or writing a roster document.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed JSON or XML.
    #[error("parse error: {0}")]
    Parse(String),

    /// A required field or element is missing.
    #[error("structure error: {0}")]
    Structure(String),

    /// A field is present but its value cannot be interpreted.
    #[error("format error: {0}")]
    Format(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Io => CodecError::Io(err.into()),
            Category::Syntax | Category::Eof => CodecError::Parse(err.to_string()),
            Category::Data => CodecError::Structure(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for CodecError {
    fn from(err: quick_xml::Error) -> Self {
        CodecError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_grade_message() {
        let err = UniversityError::InvalidGrade {
            grade: 55,
            min: 0,
            max: 54,
        };
        assert_eq!(err.to_string(), "grade 55 is out of range (expected 0..=54)");
    }

    #[test]
    fn test_json_error_classification() {
        let syntax = serde_json::from_str::<Vec<u8>>("[1, 2").unwrap_err();
        assert!(matches!(CodecError::from(syntax), CodecError::Parse(_)));

        let data = serde_json::from_str::<Vec<u8>>("[\"x\"]").unwrap_err();
        assert!(matches!(CodecError::from(data), CodecError::Structure(_)));
    }
}
