use std::fmt;

use crate::{error::LookupError, registry::Registry, tables::EnumDescriptor};

/// A fieldless enum with name and value lookup tables.
///
/// Implemented by the [`smart_enum!`](crate::smart_enum) macro and the
/// `SmartEnum` derive. Both fill in [`Self::DECLARATION`] with the
/// enumerator list, the tables are built from it on first use.
pub trait SmartEnum: Copy + 'static {
    /// The enumerator list, e.g. `"Red, Green = 5, Blue"`.
    const DECLARATION: &'static str;

    fn to_value(self) -> i32;

    fn from_value(value: i32) -> Option<Self>;

    /// # Panics
    ///
    /// If [`Self::DECLARATION`] is malformed.
    fn descriptor() -> &'static EnumDescriptor {
        Registry::global().descriptor::<Self>()
    }

    /// The canonical name of this value.
    fn to_name(self) -> Result<&'static str, LookupError> {
        Self::descriptor().name_of(self.to_value())
    }

    /// Look up a variant by its canonical name.
    fn from_name(name: &str) -> Result<Self, LookupError> {
        let value = Self::descriptor().value_of(name)?;
        Self::from_value(value).ok_or(LookupError::ValueNotFound(value))
    }

    /// All declared variants in declaration order.
    fn list() -> Vec<Self> {
        Self::descriptor()
            .list()
            .iter()
            .filter_map(|value| Self::from_value(*value))
            .collect()
    }

    fn display(self) -> Named<Self> {
        Named(self)
    }
}

/// Formats an enum value as its canonical name.
///
/// Formatting fails with [`fmt::Error`] if the value has no name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Named<E>(pub E);

impl<E: SmartEnum> fmt::Display for Named<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.0.to_name().map_err(|_| fmt::Error)?;
        f.pad(name)
    }
}
