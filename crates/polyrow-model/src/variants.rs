//! Employee variants carrying one extra field each.

use std::fmt;

use polyrow_core::{Persistable, Record};

use crate::employee::EmployeeFields;

pub const SUBJECT: &str = "Subject";
pub const LANGUAGE: &str = "Language";
pub const ROLE: &str = "Role";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Teacher {
    pub base: EmployeeFields,
    pub subject: String,
}

impl Teacher {
    pub const CLASS_ID: &'static str = "Teacher";

    pub fn new(base: EmployeeFields, subject: impl Into<String>) -> Self {
        Self {
            base,
            subject: subject.into(),
        }
    }
}

impl Persistable for Teacher {
    fn class_id(&self) -> &str {
        Self::CLASS_ID
    }

    fn serialize(&self, record: &mut Record) {
        self.base.serialize(self, record);
        record.set(SUBJECT, self.subject.as_str());
    }

    fn deserialize(&mut self, record: &Record) {
        self.base.deserialize(record);
        self.subject = record.get(SUBJECT).to_string();
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt_with_banner(self.class_id(), f)?;
        writeln!(f, "Subject: {}", self.subject)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Programmer {
    pub base: EmployeeFields,
    pub language: String,
}

impl Programmer {
    pub const CLASS_ID: &'static str = "Programmer";

    pub fn new(base: EmployeeFields, language: impl Into<String>) -> Self {
        Self {
            base,
            language: language.into(),
        }
    }
}

impl Persistable for Programmer {
    fn class_id(&self) -> &str {
        Self::CLASS_ID
    }

    fn serialize(&self, record: &mut Record) {
        self.base.serialize(self, record);
        record.set(LANGUAGE, self.language.as_str());
    }

    fn deserialize(&mut self, record: &Record) {
        self.base.deserialize(record);
        self.language = record.get(LANGUAGE).to_string();
    }
}

impl fmt::Display for Programmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt_with_banner(self.class_id(), f)?;
        writeln!(f, "Language: {}", self.language)
    }
}

/// Employee played by an actor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilmCharacterEmployee {
    pub base: EmployeeFields,
    pub role: String,
}

impl FilmCharacterEmployee {
    pub const CLASS_ID: &'static str = "FilmCharacterEmployee";

    pub fn new(base: EmployeeFields, role: impl Into<String>) -> Self {
        Self {
            base,
            role: role.into(),
        }
    }
}

impl Persistable for FilmCharacterEmployee {
    fn class_id(&self) -> &str {
        Self::CLASS_ID
    }

    fn serialize(&self, record: &mut Record) {
        self.base.serialize(self, record);
        record.set(ROLE, self.role.as_str());
    }

    fn deserialize(&mut self, record: &Record) {
        self.base.deserialize(record);
        self.role = record.get(ROLE).to_string();
    }
}

impl fmt::Display for FilmCharacterEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt_with_banner(self.class_id(), f)?;
        writeln!(f, "Role: {}", self.role)
    }
}
