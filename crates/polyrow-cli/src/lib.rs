//! CLI library components for polyrow.

pub mod config;
pub mod logging;
