//! University domain model with JSON and XML roster codecs.
//!
//! Models students, professors, courses, enrollments, groups, departments,
//! faculties, rooms, lessons, and schedules as an in-memory object graph,
//! and serializes the student roster to and from JSON and XML.
//!
//! # Modules
//!
//! - **`models`**: Entity records — `Student`, `Professor`, `Course`,
//!   `Enrollment`, `Group`, `Department`, `Faculty`, `Room`, `Lesson`,
//!   `Schedule` — and their typed handles
//! - **`University`**: Arena owning every entity, plus the relationship
//!   methods that link them (strict and permissive entry points)
//! - **`validation`**: Grade range check and whole-graph integrity sweep
//! - **`codec`**: Roster encoding and decoding (JSON, XML, files)
//! - **`config`**: Codec options
//!
//! # Example
//!
//! ```
//! use u_campus::models::{Course, PersonInfo, Student};
//! use u_campus::{RosterCodec, University};
//!
//! let mut uni = University::new();
//! let s = uni.add_student(Student::new(
//!     "124017",
//!     PersonInfo::new("Sabina", "Babaeva", "2005-03-22"),
//! ));
//! let c = uni.add_course(Course::new("09.03.03", "Introduction to Programming", 5));
//! let e = uni.enroll_in_course(s, c).unwrap();
//! uni.set_grade(e, 48).unwrap();
//! assert!(uni.enroll_in_course(s, c).is_err());
//!
//! let codec = RosterCodec::new();
//! let json = codec.to_json_string(&uni, &[s]).unwrap();
//! let reloaded = codec.from_json_str(&json).unwrap();
//! assert_eq!(reloaded.students()[0].student_id, "124017");
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod models;
mod relations;
mod university;
pub mod validation;

pub use codec::{
    load_students_from_json, load_students_from_xml, save_students_to_json, save_students_to_xml,
    RosterCodec,
};
pub use config::CodecOptions;
pub use error::{CodecError, Result, UniversityError};
pub use university::University;
