//! Capability shared by every type persisted in a record file.

use std::any::Any;
use std::fmt;

use crate::record::{CLASS_ID, Record};

/// A value that can be written to and restored from a [`Record`].
///
/// Implementors always write their discriminator through
/// [`write_class_id`] so the loader can pick the matching constructor. The
/// `Display` supertrait is for presentation only; the store never calls it.
pub trait Persistable: Any + fmt::Debug + fmt::Display + 'static {
    /// Discriminator identifying the concrete variant.
    fn class_id(&self) -> &str;

    /// Write every field, including the discriminator, into `record`.
    fn serialize(&self, record: &mut Record);

    /// Populate fields from `record`. Absent fields read as empty.
    fn deserialize(&mut self, record: &Record);
}

/// Write the discriminator of `object` into the reserved field.
pub fn write_class_id(object: &dyn Persistable, record: &mut Record) {
    record.set(CLASS_ID, object.class_id());
}

impl dyn Persistable {
    /// Borrow the concrete variant, if it is a `T`.
    pub fn downcast_ref<T: Persistable>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    pub fn is<T: Persistable>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }
}
