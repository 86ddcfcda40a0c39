//! Employee record variants persisted with `polyrow-core`.
//!
//! Every variant embeds [`EmployeeFields`] and adds at most one field of its
//! own. Use [`registry`] to load files containing any of them.

pub mod employee;
pub mod registry;
pub mod sample;
pub mod variants;

pub use employee::{Employee, EmployeeFields};
pub use registry::{build_registry, registry};
pub use variants::{FilmCharacterEmployee, Programmer, Teacher};
