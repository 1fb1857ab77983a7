//! Core runtime for Tessera: typed column fields, negatable predicates,
//! comparators and foreign-key navigation over caller-supplied snapshots.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod comparator;
pub mod error;
pub mod field;
pub mod identity;
pub mod mapper;
pub mod navigation;
pub mod predicate;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, mappers, or trace sinks are re-exported here.
///

pub mod prelude {
    pub use crate::{
        comparator::{FieldComparator, NullOrder},
        field::{
            BooleanField, ByteField, CharField, DoubleField, Field, FieldValue as _, FloatField,
            ForeignKeyField, IntField, LongField, ShortField, StringField,
        },
        identity::{ColumnIdentifier, TableIdentifier},
        predicate::{Filter, Inclusion, Predicate, PredicateType},
        value::Value,
    };
}
