//! Codec configuration.

use serde::{Deserialize, Serialize};

/// Title given to courses reconstructed from a roster file.
pub const PLACEHOLDER_COURSE_TITLE: &str = "Unknown Course";

/// Options controlling roster encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Title for decoded courses, which carry only a code in the file.
    pub placeholder_course_title: String,
    /// Whether decoded grades must lie in the accepted grade range.
    /// When `false`, any integer is accepted.
    pub validate_grades: bool,
    /// Spaces per nesting level in XML output (0 = single line).
    pub xml_indent: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            placeholder_course_title: PLACEHOLDER_COURSE_TITLE.to_string(),
            validate_grades: true,
            xml_indent: 2,
        }
    }
}

impl CodecOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder title for decoded courses.
    pub fn with_placeholder_course_title(mut self, title: impl Into<String>) -> Self {
        self.placeholder_course_title = title.into();
        self
    }

    /// Enables or disables grade range checks on decode.
    pub fn with_grade_validation(mut self, enabled: bool) -> Self {
        self.validate_grades = enabled;
        self
    }

    /// Sets the XML indentation width.
    pub fn with_xml_indent(mut self, spaces: usize) -> Self {
        self.xml_indent = spaces;
        self
    }
}
