//! Person capability shared by students and professors.

use serde::{Deserialize, Serialize};

/// Identity fields common to every person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInfo {
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Birth date as an ISO date string (`YYYY-MM-DD`).
    pub birth_date: String,
}

impl PersonInfo {
    /// Creates person info.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            birth_date: birth_date.into(),
        }
    }
}

/// Anything that carries [`PersonInfo`].
pub trait Person {
    /// The composed identity fields.
    fn person(&self) -> &PersonInfo;

    /// Given name.
    fn name(&self) -> &str {
        &self.person().name
    }

    /// Family name.
    fn surname(&self) -> &str {
        &self.person().surname
    }

    /// Birth date as an ISO date string.
    fn birth_date(&self) -> &str {
        &self.person().birth_date
    }

    /// `"{name} {surname}"`.
    fn full_name(&self) -> String {
        let p = self.person();
        format!("{} {}", p.name, p.surname)
    }
}

impl Person for PersonInfo {
    fn person(&self) -> &PersonInfo {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let p = PersonInfo::new("Alice", "Johnson", "2006-09-21");
        assert_eq!(p.full_name(), "Alice Johnson");
        assert_eq!(p.name(), "Alice");
        assert_eq!(p.surname(), "Johnson");
        assert_eq!(p.birth_date(), "2006-09-21");
    }
}
