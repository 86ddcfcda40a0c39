//! Optional TOML configuration file.
//!
//! ```toml
//! [codec]
//! delimiter = ";"
//! quote = "\""
//! ```
//!
//! Missing keys fall back to the codec defaults and unknown keys are
//! rejected. Command line flags take precedence over the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use polyrow_core::CodecOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub codec: CodecOptions,
}

impl AppConfig {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("load config: {}", path.display()))
    }
}

/// Resolve codec options from an optional config file and flag overrides.
pub fn resolve_codec(config: Option<&Path>, delimiter: Option<char>) -> Result<CodecOptions> {
    let mut codec = match config {
        Some(path) => AppConfig::load(path)?.codec,
        None => CodecOptions::default(),
    };
    if let Some(delimiter) = delimiter {
        codec = codec.with_delimiter(delimiter);
    }
    codec.validate().context("validate codec options")?;
    Ok(codec)
}
