//! Process-wide registry of the employee variants.

use std::sync::OnceLock;

use polyrow_core::Registry;
use tracing::debug;

use crate::employee::Employee;
use crate::variants::{FilmCharacterEmployee, Programmer, Teacher};

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Registry covering every variant in this crate.
///
/// Built on first use and never mutated afterward.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(build_registry)
}

/// Build a fresh registry of every variant in this crate.
pub fn build_registry() -> Registry {
    let registry = Registry::new()
        .with::<Employee>()
        .with::<Teacher>()
        .with::<Programmer>()
        .with::<FilmCharacterEmployee>();
    debug!(variants = registry.len(), "built employee registry");
    registry
}
