//! Process-wide storage of enum descriptors, keyed by enum type.

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use once_cell::sync::Lazy;

use crate::{error::ParseError, tables::EnumDescriptor, SmartEnum};

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// Maps each [`SmartEnum`] type to its descriptor.
///
/// Descriptors are built from [`SmartEnum::DECLARATION`] on first request
/// and leaked, so every lookup hands out the same `&'static` value. The only
/// instance is [`Registry::global`]:
///
/// ```compile_fail
/// let registry = smart_enum::Registry::new();
/// ```
pub struct Registry {
    descriptors: RwLock<HashMap<TypeId, &'static EnumDescriptor>>,
}

impl Registry {
    fn new() -> Self {
        Self {
            descriptors: RwLock::new(HashMap::new()),
        }
    }

    /// The registry used by [`SmartEnum::descriptor`].
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Get the descriptor for `E`, building it if necessary.
    pub fn try_descriptor<E: SmartEnum>(&self) -> Result<&'static EnumDescriptor, ParseError> {
        let id = TypeId::of::<E>();
        if let Some(descriptor) = self.read().get(&id).copied() {
            return Ok(descriptor);
        }

        let mut descriptors = self.write();
        // Another thread may have won the race for the write lock.
        if let Some(descriptor) = descriptors.get(&id).copied() {
            return Ok(descriptor);
        }

        let descriptor = EnumDescriptor::parse(E::DECLARATION)?;
        let descriptor: &'static EnumDescriptor = Box::leak(Box::new(descriptor));
        tracing::debug!(
            enum_type = std::any::type_name::<E>(),
            entries = descriptor.len(),
            "registered enum descriptor"
        );
        descriptors.insert(id, descriptor);
        Ok(descriptor)
    }

    /// Get the descriptor for `E`, building it if necessary.
    ///
    /// # Panics
    ///
    /// If the declaration of `E` is malformed. Use [`Self::register`] at
    /// start-up to surface that as an error instead.
    pub fn descriptor<E: SmartEnum>(&self) -> &'static EnumDescriptor {
        match self.try_descriptor::<E>() {
            Ok(descriptor) => descriptor,
            Err(err) => {
                tracing::error!(
                    enum_type = std::any::type_name::<E>(),
                    error = %err,
                    "invalid enum declaration"
                );
                panic!(
                    "invalid declaration for enum {}: {}",
                    std::any::type_name::<E>(),
                    err
                );
            }
        }
    }

    /// Eagerly build and store the descriptor for `E`.
    pub fn register<E: SmartEnum>(&self) -> Result<(), ParseError> {
        self.try_descriptor::<E>().map(|_| ())
    }

    pub fn is_registered<E: SmartEnum>(&self) -> bool {
        self.read().contains_key(&TypeId::of::<E>())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // The map is never left half-updated, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<TypeId, &'static EnumDescriptor>> {
        self.descriptors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TypeId, &'static EnumDescriptor>> {
        self.descriptors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Fruit {
        Apple,
        Pear = 4,
    }

    impl SmartEnum for Fruit {
        const DECLARATION: &'static str = "Apple, Pear = 4";

        fn to_value(self) -> i32 {
            self as i32
        }

        fn from_value(value: i32) -> Option<Self> {
            match value {
                0 => Some(Self::Apple),
                4 => Some(Self::Pear),
                _ => None,
            }
        }
    }

    #[derive(Clone, Copy)]
    struct Broken;

    impl SmartEnum for Broken {
        const DECLARATION: &'static str = "A = one";

        fn to_value(self) -> i32 {
            0
        }

        fn from_value(_value: i32) -> Option<Self> {
            None
        }
    }

    #[test]
    fn test_registry_builds_once() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(!registry.is_registered::<Fruit>());

        let a = registry.try_descriptor::<Fruit>().unwrap();
        let b = registry.descriptor::<Fruit>();
        assert!(std::ptr::eq(a, b));
        assert!(registry.is_registered::<Fruit>());
        assert_eq!(registry.len(), 1);
        assert_eq!(a.list(), &[0, 4]);
    }

    #[test]
    fn test_registry_register_reports_errors() {
        let registry = Registry::new();
        assert!(matches!(
            registry.register::<Broken>(),
            Err(ParseError::MalformedIntegerLiteral { .. })
        ));
        assert!(!registry.is_registered::<Broken>());
        assert!(registry.register::<Fruit>().is_ok());
    }

    #[test]
    #[should_panic(expected = "invalid declaration for enum")]
    fn test_registry_descriptor_panics_on_malformed() {
        Registry::new().descriptor::<Broken>();
    }

    #[test]
    fn test_global_registry_is_shared() {
        assert!(std::ptr::eq(Registry::global(), Registry::global()));
        let a = Registry::global().descriptor::<Fruit>();
        let b = Fruit::descriptor();
        assert!(std::ptr::eq(a, b));
    }
}
