//! Bidirectional conversion between a column's stored representation and
//! the domain value the entity exposes.
//!
//! Mappers are stateless and shareable. Only `reverse(map(d)) == d` is
//! guaranteed for values the mapper accepts; a mapper may be lossy in the
//! forward direction.

mod builtin;


use crate::error::MappingError;
use std::{fmt, marker::PhantomData, sync::Arc};

// re-exports
pub use builtin::{IntegerZeroOneToBooleanMapper, LongToIntMapper, LookupMapper};

///
/// TypeMapper
///
/// `D` is the database representation, `J` the domain value.
///

pub trait TypeMapper<D, J>: Send + Sync {
    /// Short stable name used in diagnostics.
    fn label(&self) -> &'static str;

    /// Convert a stored value into the domain value.
    fn map(&self, value: D) -> Result<J, MappingError>;

    /// Convert a domain value back into its stored representation.
    fn reverse(&self, value: J) -> Result<D, MappingError>;
}

///
/// IdentityMapper
///
/// Default mapper when the stored and domain types coincide.
///

pub struct IdentityMapper<T>(PhantomData<fn() -> T>);

impl<T> IdentityMapper<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for IdentityMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TypeMapper<T, T> for IdentityMapper<T> {
    fn label(&self) -> &'static str {
        "identity"
    }

    fn map(&self, value: T) -> Result<T, MappingError> {
        Ok(value)
    }

    fn reverse(&self, value: T) -> Result<T, MappingError> {
        Ok(value)
    }
}

///
/// FnMapper
///
/// Mapper assembled from two conversion functions, for generated code.
///

pub struct FnMapper<D, J> {
    label: &'static str,
    map: Arc<dyn Fn(D) -> Result<J, MappingError> + Send + Sync>,
    reverse: Arc<dyn Fn(J) -> Result<D, MappingError> + Send + Sync>,
}

impl<D, J> FnMapper<D, J> {
    pub fn new(
        label: &'static str,
        map: impl Fn(D) -> Result<J, MappingError> + Send + Sync + 'static,
        reverse: impl Fn(J) -> Result<D, MappingError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            label,
            map: Arc::new(map),
            reverse: Arc::new(reverse),
        }
    }
}

impl<D, J> Clone for FnMapper<D, J> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            map: Arc::clone(&self.map),
            reverse: Arc::clone(&self.reverse),
        }
    }
}

impl<D, J> fmt::Debug for FnMapper<D, J> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMapper")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<D, J> TypeMapper<D, J> for FnMapper<D, J> {
    fn label(&self) -> &'static str {
        self.label
    }

    fn map(&self, value: D) -> Result<J, MappingError> {
        (self.map)(value)
    }

    fn reverse(&self, value: J) -> Result<D, MappingError> {
        (self.reverse)(value)
    }
}
