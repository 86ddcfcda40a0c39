//! Discriminator to constructor table used when loading.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::persist::Persistable;

/// Zero-argument constructor yielding a default instance of one variant.
pub type Constructor = fn() -> Box<dyn Persistable>;

/// Table of known variants keyed by discriminator.
///
/// Build it once at startup and share it read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    constructors: BTreeMap<String, Constructor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `constructor` under `discriminator`, replacing any previous one.
    pub fn register(&mut self, discriminator: impl Into<String>, constructor: Constructor) {
        let discriminator = discriminator.into();
        if self
            .constructors
            .insert(discriminator.clone(), constructor)
            .is_some()
        {
            warn!(%discriminator, "replacing registered constructor");
        } else {
            debug!(%discriminator, "registered constructor");
        }
    }

    /// Register `T` under the discriminator its default value reports.
    pub fn register_default<T: Persistable + Default>(&mut self) {
        let discriminator = T::default().class_id().to_string();
        self.register(discriminator, construct_default::<T>);
    }

    /// Builder form of [`Registry::register_default`].
    #[must_use]
    pub fn with<T: Persistable + Default>(mut self) -> Self {
        self.register_default::<T>();
        self
    }

    /// Instantiate the default value of the variant named `discriminator`.
    pub fn create(&self, discriminator: &str) -> Result<Box<dyn Persistable>> {
        self.constructors
            .get(discriminator)
            .map(|constructor| constructor())
            .ok_or_else(|| StoreError::unknown_discriminator(discriminator))
    }

    pub fn contains(&self, discriminator: &str) -> bool {
        self.constructors.contains_key(discriminator)
    }

    /// Registered discriminators in sorted order.
    pub fn discriminators(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

fn construct_default<T: Persistable + Default>() -> Box<dyn Persistable> {
    Box::new(T::default())
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use crate::persist::write_class_id;
    use crate::record::Record;

    #[derive(Debug, Default)]
    struct Widget {
        size: String,
    }

    impl fmt::Display for Widget {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Widget {}", self.size)
        }
    }

    impl Persistable for Widget {
        fn class_id(&self) -> &str {
            "Widget"
        }

        fn serialize(&self, record: &mut Record) {
            write_class_id(self, record);
            record.set("Size", self.size.as_str());
        }

        fn deserialize(&mut self, record: &Record) {
            self.size = record.get("Size").to_string();
        }
    }

    #[test]
    fn test_create_registered_variant() {
        let registry = Registry::new().with::<Widget>();
        assert!(registry.contains("Widget"));
        let object = registry.create("Widget").unwrap();
        assert_eq!(object.class_id(), "Widget");
        assert!(object.is::<Widget>());
    }

    #[test]
    fn test_create_unknown_discriminator() {
        let registry = Registry::new().with::<Widget>();
        let err = registry.create("Gadget").unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnknownDiscriminator { ref discriminator } if discriminator == "Gadget"
        ));
    }

    #[test]
    fn test_register_replaces_existing() {
        fn other() -> Box<dyn Persistable> {
            Box::new(Widget {
                size: "large".to_string(),
            })
        }
        let mut registry = Registry::new().with::<Widget>();
        registry.register("Widget", other);
        assert_eq!(registry.len(), 1);
        let object = registry.create("Widget").unwrap();
        let widget = object.downcast_ref::<Widget>().unwrap();
        assert_eq!(widget.size, "large");
    }

    #[test]
    fn test_discriminators_sorted() {
        fn make() -> Box<dyn Persistable> {
            Box::new(Widget::default())
        }
        let mut registry = Registry::new();
        registry.register("b", make);
        registry.register("a", make);
        assert_eq!(registry.discriminators().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
