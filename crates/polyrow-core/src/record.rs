//! Sparse named field container and its line codec.
//!
//! A [`Record`] maps field names to string values. Field names iterate in
//! sorted order, which fixes the column order of every header written from a
//! record. Body lines are written against an explicit column list supplied
//! by the caller, so one record can be encoded against a header that was
//! derived from other records.

use std::collections::BTreeMap;

use crate::error::{Result, StoreError};
use crate::options::CodecOptions;

/// Reserved field holding the variant discriminator.
pub const CLASS_ID: &str = "ClassID";

/// One row of field values keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `name`, or `""` when the field is absent.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Register `name` as a column without giving it a value.
    ///
    /// An existing value is left untouched.
    pub fn declare(&mut self, name: impl Into<String>) {
        self.fields.entry(name.into()).or_default();
    }

    /// Insert or overwrite the value of `name`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Discriminator stored in the reserved [`CLASS_ID`] field.
    pub fn class_id(&self) -> &str {
        self.get(CLASS_ID)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All field names in canonical (sorted) order.
    pub fn columns(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    /// Iterate `(name, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Encode this record's column names as a header line.
    pub fn encode_header(&self, options: &CodecOptions) -> String {
        let mut line = String::new();
        for name in self.fields.keys() {
            push_field(&mut line, name, options);
        }
        line
    }

    /// Encode the values of `columns`, in that order, as a body line.
    ///
    /// Columns this record does not carry are written as empty fields.
    pub fn encode_body(&self, columns: &[String], options: &CodecOptions) -> String {
        let mut line = String::new();
        for name in columns {
            push_field(&mut line, self.get(name), options);
        }
        line
    }

    /// Decode a header line into column names, keeping the file's order.
    pub fn decode_header(line: &str, options: &CodecOptions) -> Vec<String> {
        split_fields(line, options)
    }

    /// Decode a body line, assigning values to `columns` by position.
    pub fn decode_body(columns: &[String], line: &str, options: &CodecOptions) -> Result<Self> {
        let values = split_fields(line, options);
        if values.len() != columns.len() {
            return Err(StoreError::FieldCountMismatch {
                expected: columns.len(),
                actual: values.len(),
            });
        }
        let mut record = Self::new();
        for (name, value) in columns.iter().zip(values) {
            record.set(name.clone(), value);
        }
        Ok(record)
    }
}

fn push_field(line: &mut String, value: &str, options: &CodecOptions) {
    line.push(options.quote);
    line.push_str(value);
    line.push(options.quote);
    line.push(options.delimiter);
}

/// Split a line into unquoted tokens.
///
/// A trailing delimiter closes the last field instead of opening a new one,
/// and an empty line has no tokens.
fn split_fields(line: &str, options: &CodecOptions) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let line = line.strip_suffix(options.delimiter).unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }
    line.split(options.delimiter)
        .map(|token| token.chars().filter(|ch| *ch != options.quote).collect())
        .collect()
}
