//! Codec options for the delimited line format.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ';';

/// Default quote character wrapped around every field.
pub const DEFAULT_QUOTE: char = '"';

/// Options controlling how records are encoded to and decoded from lines.
///
/// Values are never escaped: a value containing the delimiter, the quote
/// character, or a line break does not survive a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecOptions {
    /// Character separating fields. Every field, including the last one, is
    /// followed by it.
    pub delimiter: char,
    /// Character wrapped around every field on write and stripped on read.
    pub quote: char,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
        }
    }
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Check that files written with these options can be read back.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == self.quote {
            return Err(StoreError::invalid_options(format!(
                "delimiter and quote are both '{}'",
                self.delimiter
            )));
        }
        for (name, ch) in [("delimiter", self.delimiter), ("quote", self.quote)] {
            if ch == '\n' || ch == '\r' {
                return Err(StoreError::invalid_options(format!(
                    "{name} must not be a line break"
                )));
            }
        }
        Ok(())
    }
}
