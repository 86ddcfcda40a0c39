//! Identity fields shared by every employee variant.

use std::fmt;

use polyrow_core::{Persistable, Record, write_class_id};

pub const FIRST_NAME: &str = "FirstName";
pub const LAST_NAME: &str = "LastName";
pub const COMPANY: &str = "Company";
pub const ADDRESS: &str = "Address";
pub const EMAIL: &str = "Email";

/// Field group embedded by value in each variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub address: String,
    pub email: String,
}

impl EmployeeFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        company: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            company: company.into(),
            address: address.into(),
            email: email.into(),
        }
    }

    /// Write the discriminator of `owner` followed by the shared fields.
    pub fn serialize(&self, owner: &dyn Persistable, record: &mut Record) {
        write_class_id(owner, record);
        record.set(FIRST_NAME, self.first_name.as_str());
        record.set(LAST_NAME, self.last_name.as_str());
        record.set(COMPANY, self.company.as_str());
        record.set(ADDRESS, self.address.as_str());
        record.set(EMAIL, self.email.as_str());
    }

    pub fn deserialize(&mut self, record: &Record) {
        self.first_name = record.get(FIRST_NAME).to_string();
        self.last_name = record.get(LAST_NAME).to_string();
        self.company = record.get(COMPANY).to_string();
        self.address = record.get(ADDRESS).to_string();
        self.email = record.get(EMAIL).to_string();
    }

    /// Write the `-----<ClassID>-----` banner and one line per shared field.
    pub fn fmt_with_banner(&self, class_id: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-----{class_id}-----")?;
        writeln!(f, "First name: {}", self.first_name)?;
        writeln!(f, "Last name: {}", self.last_name)?;
        writeln!(f, "Company: {}", self.company)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Email: {}", self.email)
    }
}

/// Employee with no fields beyond the shared group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Employee {
    pub base: EmployeeFields,
}

impl Employee {
    pub const CLASS_ID: &'static str = "Employee";

    pub fn new(base: EmployeeFields) -> Self {
        Self { base }
    }
}

impl Persistable for Employee {
    fn class_id(&self) -> &str {
        Self::CLASS_ID
    }

    fn serialize(&self, record: &mut Record) {
        self.base.serialize(self, record);
    }

    fn deserialize(&mut self, record: &Record) {
        self.base.deserialize(record);
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt_with_banner(self.class_id(), f)
    }
}
