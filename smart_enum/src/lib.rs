//! Name and value lookup tables for fieldless enums.
//!
//! An enum is described by its enumerator list (`"Red, Green = 5, Blue"`).
//! The list is parsed once, on first use, into an [`EnumDescriptor`] that is
//! kept for the lifetime of the process in the global [`Registry`].

mod error;
mod macros;
pub mod parse;
pub mod registry;
mod tables;
mod traits;

pub use self::{
    error::{Error, LookupError, ParseError},
    parse::{EnumEntry, NameTable, ValueTable},
    registry::Registry,
    tables::EnumDescriptor,
    traits::{Named, SmartEnum},
};

#[cfg(feature = "macros")]
pub use smart_enum_macros::SmartEnum;
