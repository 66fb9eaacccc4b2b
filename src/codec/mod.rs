//! Roster serialization.
//!
//! Converts students (with their enrollments, course codes, and group names)
//! to and from JSON and XML. Decoding is lossy by construction: courses come
//! back with only their code, and every group reference becomes a fresh
//! group.
//!
//! Files are read and written whole. A decode either yields a complete
//! [`University`] or an error; no partial graph is returned.
//!
//! # Errors
//!
//! | Cause | Error |
//! |-------|-------|
//! | Malformed JSON or XML | [`CodecError::Parse`] |
//! | Missing field or element | [`CodecError::Structure`] |
//! | Bad date or grade value | [`CodecError::Format`] |

mod json;
mod record;
mod xml;

pub use record::{
    decode_records, encode_records, format_timestamp, parse_timestamp, EnrollmentRecord,
    StudentRecord,
};

use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::CodecOptions;
use crate::error::CodecError;
use crate::models::StudentRef;
use crate::University;

/// JSON/XML roster codec configured by [`CodecOptions`].
#[derive(Debug, Clone, Default)]
pub struct RosterCodec {
    options: CodecOptions,
}

impl RosterCodec {
    /// Creates a codec with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec with the given options.
    pub fn with_options(options: CodecOptions) -> Self {
        Self { options }
    }

    /// The active options.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encodes `students` as a JSON document.
    pub fn to_json_string(
        &self,
        university: &University,
        students: &[StudentRef],
    ) -> Result<String, CodecError> {
        json::encode(&encode_records(university, students))
    }

    /// Decodes a JSON document into a fresh university.
    pub fn from_json_str(&self, text: &str) -> Result<University, CodecError> {
        decode_records(json::decode(text)?, &self.options)
    }

    /// Encodes `students` as an XML document.
    pub fn to_xml_string(
        &self,
        university: &University,
        students: &[StudentRef],
    ) -> Result<String, CodecError> {
        xml::encode(&encode_records(university, students), self.options.xml_indent)
    }

    /// Decodes an XML document into a fresh university.
    pub fn from_xml_str(&self, text: &str) -> Result<University, CodecError> {
        decode_records(xml::decode(text)?, &self.options)
    }

    /// Writes `students` to a JSON file, replacing it.
    pub fn save_json(
        &self,
        university: &University,
        students: &[StudentRef],
        path: impl AsRef<Path>,
    ) -> Result<(), CodecError> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string(university, students)?)?;
        info!(path = %path.display(), students = students.len(), "roster saved as JSON");
        Ok(())
    }

    /// Reads a JSON roster file.
    pub fn load_json(&self, path: impl AsRef<Path>) -> Result<University, CodecError> {
        let path = path.as_ref();
        let university = self.from_json_str(&fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            students = university.students().len(),
            "roster loaded from JSON"
        );
        Ok(university)
    }

    /// Writes `students` to an XML file, replacing it.
    pub fn save_xml(
        &self,
        university: &University,
        students: &[StudentRef],
        path: impl AsRef<Path>,
    ) -> Result<(), CodecError> {
        let path = path.as_ref();
        fs::write(path, self.to_xml_string(university, students)?)?;
        info!(path = %path.display(), students = students.len(), "roster saved as XML");
        Ok(())
    }

    /// Reads an XML roster file.
    pub fn load_xml(&self, path: impl AsRef<Path>) -> Result<University, CodecError> {
        let path = path.as_ref();
        let university = self.from_xml_str(&fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            students = university.students().len(),
            "roster loaded from XML"
        );
        Ok(university)
    }
}

/// Writes `students` to a JSON file with default options.
pub fn save_students_to_json(
    university: &University,
    students: &[StudentRef],
    path: impl AsRef<Path>,
) -> Result<(), CodecError> {
    RosterCodec::new().save_json(university, students, path)
}

/// Reads a JSON roster file with default options.
pub fn load_students_from_json(path: impl AsRef<Path>) -> Result<University, CodecError> {
    RosterCodec::new().load_json(path)
}

/// Writes `students` to an XML file with default options.
pub fn save_students_to_xml(
    university: &University,
    students: &[StudentRef],
    path: impl AsRef<Path>,
) -> Result<(), CodecError> {
    RosterCodec::new().save_xml(university, students, path)
}

/// Reads an XML roster file with default options.
pub fn load_students_from_xml(path: impl AsRef<Path>) -> Result<University, CodecError> {
    RosterCodec::new().load_xml(path)
}
