//! Validation for the university object graph.
//!
//! Two levels:
//! - [`validate_grade`] is the per-mutation range check used by
//!   [`Enrollment::set_grade`](crate::models::Enrollment::set_grade) and by
//!   the roster decoders.
//! - [`validate_university`] sweeps a whole graph and reports every
//!   integrity problem at once. Detects:
//!   - Duplicate student, employee, or room keys
//!   - Stored grades outside the accepted range
//!   - One-sided Student↔Group, Student↔Enrollment, or Group↔Schedule links

use crate::error::{Result, UniversityError};
use crate::University;
use std::collections::HashSet;

/// Lowest accepted grade.
pub const GRADE_MIN: i32 = 0;
/// Highest accepted grade.
pub const GRADE_MAX: i32 = 54;

/// Checks that `grade` lies in `GRADE_MIN..=GRADE_MAX` and returns it.
pub fn validate_grade(grade: i32) -> Result<i32> {
    if (GRADE_MIN..=GRADE_MAX).contains(&grade) {
        Ok(grade)
    } else {
        Err(UniversityError::InvalidGrade {
            grade,
            min: GRADE_MIN,
            max: GRADE_MAX,
        })
    }
}

/// Validation result.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same unique key.
    DuplicateId,
    /// A stored grade is out of range.
    InvalidGrade,
    /// A link is recorded on one side only.
    BrokenLink,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the structural integrity of a university graph.
///
/// Group names and course codes are not checked for uniqueness: roster
/// decoding creates a fresh group and course per reference.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_university(university: &University) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for s in university.students() {
        if !seen.insert(s.student_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.student_id),
            ));
        }
    }

    let mut seen = HashSet::new();
    for p in university.professors() {
        if !seen.insert(p.employee_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", p.employee_id),
            ));
        }
    }

    let mut seen = HashSet::new();
    for r in university.rooms() {
        if !seen.insert(r.room_number.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room number: {}", r.room_number),
            ));
        }
    }

    for (eref, e) in university.enrollments_with_refs() {
        if let Some(grade) = e.grade {
            if validate_grade(grade).is_err() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidGrade,
                    format!("Enrollment {eref} has out-of-range grade {grade}"),
                ));
            }
        }
        if !university.student(e.student).enrollments.contains(&eref) {
            errors.push(ValidationError::new(
                ValidationErrorKind::BrokenLink,
                format!("Enrollment {eref} is missing from its student's list"),
            ));
        }
    }

    for (sref, s) in university.students_with_refs() {
        for &eref in &s.enrollments {
            if university.enrollment(eref).student != sref {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BrokenLink,
                    format!(
                        "Student '{}' lists enrollment {eref} owned by another student",
                        s.student_id
                    ),
                ));
            }
        }
        for &gref in &s.groups {
            if !university.group(gref).has_student(sref) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BrokenLink,
                    format!(
                        "Student '{}' lists group '{}' which does not list them",
                        s.student_id,
                        university.group(gref).group_name
                    ),
                ));
            }
        }
    }

    for (gref, g) in university.groups_with_refs() {
        for &sref in &g.students {
            if !university.student(sref).is_member_of(gref) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BrokenLink,
                    format!(
                        "Group '{}' lists student '{}' who does not list it",
                        g.group_name,
                        university.student(sref).student_id
                    ),
                ));
            }
        }
        if let Some(sched) = g.schedule {
            if !university.schedule(sched).has_group(gref) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BrokenLink,
                    format!("Group '{}' points at {sched} which does not list it", g.group_name),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Group, PersonInfo, Professor, Room, Student};

    fn sample_university() -> University {
        let mut u = University::new();
        let s1 = u.add_student(Student::new(
            "124017",
            PersonInfo::new("Sabina", "Babaeva", "2005-03-22"),
        ));
        let s2 = u.add_student(Student::new(
            "123067",
            PersonInfo::new("Charlie", "Green", "2006-11-30"),
        ));
        let c = u.add_course(Course::new("09.03.03", "Introduction to Programming", 5));
        let g = u.add_group(Group::new("ИДБ-24-11"));
        u.enroll_in_course(s1, c).unwrap();
        u.enroll_in_course(s2, c).unwrap();
        u.join_group(s1, g).unwrap();
        u.join_group(s2, g).unwrap();
        u
    }

    #[test]
    fn test_validate_grade_range() {
        assert_eq!(validate_grade(0), Ok(0));
        assert_eq!(validate_grade(54), Ok(54));
        assert!(validate_grade(-1).is_err());
        assert!(validate_grade(55).is_err());
    }

    #[test]
    fn test_valid_university() {
        assert!(validate_university(&sample_university()).is_ok());
    }

    #[test]
    fn test_duplicate_student_id() {
        let mut u = sample_university();
        u.add_student(Student::new("124017", PersonInfo::new("A", "B", "2000-01-01")));

        let errors = validate_university(&u).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("student")));
    }

    #[test]
    fn test_duplicate_employee_and_room() {
        let mut u = University::new();
        let info = PersonInfo::new("Alice", "Johnson", "2006-09-21");
        u.add_professor(Professor::new("prof21053", info.clone()));
        u.add_professor(Professor::new("prof21053", info));
        u.add_room(Room::new("305", 2));
        u.add_room(Room::new("305", 40));

        let errors = validate_university(&u).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::DuplicateId)
                .count(),
            2
        );
    }

    #[test]
    fn test_one_sided_group_link() {
        let mut u = University::new();
        let s = u.add_student(Student::new("1", PersonInfo::new("A", "B", "2000-01-01")));
        let mut g = Group::new("G");
        g.students.push(s);
        u.add_group(g);

        let errors = validate_university(&u).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BrokenLink));
    }

    #[test]
    fn test_permissive_course_link_is_valid() {
        let mut u = sample_university();
        let s3 = u.add_student(Student::new(
            "124143",
            PersonInfo::new("David", "White", "2006-09-05"),
        ));
        let c = u.find_course("09.03.03").unwrap();
        u.course_add_student(c, s3);

        assert!(validate_university(&u).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let mut u = sample_university();
        u.add_student(Student::new("124017", PersonInfo::new("A", "B", "2000-01-01")));
        let mut g = Group::new("orphan");
        g.students.push(crate::models::StudentRef(0));
        u.add_group(g);

        let errors = validate_university(&u).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
