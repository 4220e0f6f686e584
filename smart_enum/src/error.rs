use thiserror::Error;

/// Failure while turning an enumerator list into tables.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("entry '{entry}': '{literal}' is not an integer literal")]
    MalformedIntegerLiteral { entry: String, literal: String },
    #[error("entry '{entry}': implicit value would overflow i32")]
    CounterOverflow { entry: String },
    #[error("value {value} does not fit the target type")]
    ValueOutOfRange { value: i32 },
}

/// Failure while resolving a name or value against the tables.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no enumerator named '{0}'")]
    NameNotFound(String),
    #[error("no enumerator with value {0}")]
    ValueNotFound(i32),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
