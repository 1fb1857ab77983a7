use crate::value::Value;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Every failure the core can surface. None of them is retried or
/// defaulted here; the calling layer decides the fallback.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl Error {
    /// Stable classification of this error.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Configuration(_) => ErrorClass::Configuration,
            Self::NotFound(_) => ErrorClass::NotFound,
            Self::Mapping(_) => ErrorClass::Mapping,
        }
    }

    /// Render the error prefixed with its class label.
    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{self}", self.class())
    }
}

///
/// ConfigurationError
///
/// Invalid construction arguments. Raised only while building fields,
/// foreign keys and mappers, never while evaluating them.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigurationError {
    #[error("column identifier has an empty {part} name")]
    EmptyIdentifier { part: &'static str },

    #[error("field {column} has no getter")]
    MissingGetter { column: String },

    #[error("field {column} has no setter")]
    MissingSetter { column: String },

    #[error("field {column} has no type mapper")]
    MissingTypeMapper { column: String },

    #[error("field {column} pairs a nullable accessor with a non-nullable one")]
    NullabilityMismatch { column: String },

    #[error("field {column} is not nullable")]
    NotNullable { column: String },

    #[error("mapper {mapper} maps {value} more than once")]
    DuplicateMapping { mapper: &'static str, value: String },
}

///
/// NotFoundError
///
/// A forward finder could not resolve its target in the supplied snapshot.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum NotFoundError {
    #[error("no {target} row matches {source_column} = {key}")]
    NoMatch {
        source_column: String,
        target: String,
        key: Value,
    },

    #[error("{source_column} is null; no {target} row can match")]
    NullKey {
        source_column: String,
        target: String,
    },
}

///
/// MappingError
///
/// A type mapper received a value outside its declared domain.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MappingError {
    #[error("{mapper}: {value} is outside the declared domain")]
    OutOfDomain { mapper: &'static str, value: String },

    #[error("{mapper}: no mapping for {value}")]
    Unmapped { mapper: &'static str, value: String },
}

impl MappingError {
    pub(crate) fn out_of_domain(mapper: &'static str, value: impl fmt::Debug) -> Self {
        Self::OutOfDomain {
            mapper,
            value: format!("{value:?}"),
        }
    }

    pub(crate) fn unmapped(mapper: &'static str, value: impl fmt::Debug) -> Self {
        Self::Unmapped {
            mapper,
            value: format!("{value:?}"),
        }
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Configuration,
    NotFound,
    Mapping,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Configuration => "configuration",
            Self::NotFound => "not_found",
            Self::Mapping => "mapping",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
