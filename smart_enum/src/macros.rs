/// Declare an enum together with its name and value lookup tables.
///
/// ```rust
/// use smart_enum::SmartEnum;
///
/// smart_enum::smart_enum! {
///     pub enum Signal {
///         Red,
///         Amber = 5,
///         Green,
///     }
/// }
///
/// assert_eq!(Signal::Green.to_name().unwrap(), "Green");
/// assert_eq!("Amber".parse::<Signal>().unwrap(), Signal::Amber);
/// assert_eq!(Signal::Green as i32, 6);
/// ```
///
/// Discriminants must be integer literals, optionally negated:
///
/// ```compile_fail
/// const BASE: isize = 4;
///
/// smart_enum::smart_enum! {
///     enum Shifted { A = BASE, B }
/// }
/// ```
///
/// Every value must fit into an `i32`, otherwise compilation fails:
///
/// ```compile_fail
/// smart_enum::smart_enum! {
///     #[repr(u32)]
///     enum Wide { A = 3_000_000_000, B }
/// }
/// ```
#[macro_export]
macro_rules! smart_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $name:ident $(= $value:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $enum_name {
            $(
                $(#[$variant_meta])*
                $name $(= $value)?,
            )+
        }

        $crate::__impl_smart_enum!(
            $enum_name,
            concat!($( stringify!($name), $(" = ", stringify!($value),)? "," ),+),
            [$( $name ),+]
        );
    };
}

/// Shared by [`smart_enum!`] and the `SmartEnum` derive.
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_smart_enum {
    ($enum_name:ident, $declaration:expr, [$( $name:ident ),*]) => {
        const _: () = {
            $(
                assert!(
                    $enum_name::$name as i64 == $enum_name::$name as i32 as i64,
                    "smart_enum values must fit into an i32"
                );
            )*
        };

        impl $crate::SmartEnum for $enum_name {
            const DECLARATION: &'static str = $declaration;

            fn to_value(self) -> i32 {
                self as i32
            }

            fn from_value(value: i32) -> ::core::option::Option<Self> {
                $(
                    if value == $enum_name::$name as i32 {
                        return ::core::option::Option::Some($enum_name::$name);
                    }
                )*
                ::core::option::Option::None
            }
        }

        impl ::core::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&$crate::Named(*self), f)
            }
        }

        impl ::core::str::FromStr for $enum_name {
            type Err = $crate::LookupError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::SmartEnum>::from_name(s)
            }
        }

        impl ::core::convert::TryFrom<i32> for $enum_name {
            type Error = $crate::LookupError;

            fn try_from(value: i32) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::SmartEnum>::from_value(value)
                    .ok_or($crate::LookupError::ValueNotFound(value))
            }
        }

        impl ::core::convert::From<$enum_name> for i32 {
            fn from(value: $enum_name) -> i32 {
                value as i32
            }
        }
    };
}
