//! Polymorphic record persistence to a single delimited text file.
//!
//! Objects of different concrete types live side by side in one file. Every
//! row carries a `ClassID` discriminator column, and a [`Registry`] maps
//! discriminators back to constructors when the file is loaded.
//!
//! # File Format
//!
//! ```text
//! "Address";"ClassID";"FirstName";"Language";     <- header, sorted names
//! "Brno";"Programmer";"Karel";"C++";              <- one line per object
//! ```
//!
//! Every field is quoted and followed by the delimiter (`;` by default).
//! Values are not escaped, so a value must not contain the delimiter, the
//! quote character, or a line break.
//!
//! # Example
//!
//! ```ignore
//! use polyrow_core::{Registry, Store};
//!
//! let registry = Registry::new().with::<Teacher>().with::<Programmer>();
//!
//! let mut store = Store::new();
//! store.add(Box::new(teacher));
//! store.save(Path::new("staff.csv"))?;
//!
//! let mut reloaded = Store::new();
//! for object in reloaded.load(Path::new("staff.csv"), &registry)? {
//!     println!("{object}");
//! }
//! ```
//!
//! # Architecture
//!
//! - `record.rs` - sparse field container and line codec
//! - `persist.rs` - the [`Persistable`] capability
//! - `registry.rs` - discriminator to constructor table
//! - `store.rs` - grouping, header derivation, save and load
//! - `options.rs` - delimiter and quote configuration
//! - `error.rs` - error types

mod error;
mod options;
mod persist;
mod record;
mod registry;
mod store;

pub use error::{Result, StoreError};
pub use options::{CodecOptions, DEFAULT_DELIMITER, DEFAULT_QUOTE};
pub use persist::{Persistable, write_class_id};
pub use record::{CLASS_ID, Record};
pub use registry::{Constructor, Registry};
pub use store::{Store, read_header};
