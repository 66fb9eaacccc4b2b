//! Departments and faculties.

use serde::Serialize;

use super::{CourseRef, DepartmentRef, FacultyRef};

/// A department grouping several faculties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Department {
    pub name: String,
    pub faculties: Vec<FacultyRef>,
}

/// A faculty offering courses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Faculty {
    pub name: String,
    /// Parent department, set when the faculty is added to one.
    pub department: Option<DepartmentRef>,
    pub courses: Vec<CourseRef>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faculties: Vec::new(),
        }
    }
}

impl Faculty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            department: None,
            courses: Vec::new(),
        }
    }
}
