//! Boolean tests over one field of an entity.
//!
//! A predicate is a single tagged value: a positive `Condition` plus a
//! negation flag. Negation never re-derives the condition; it flips the flag,
//! so `p.negate().test(e) == !p.test(e)` holds for every entity, including
//! entities whose field is null.

mod condition;
mod filter;
mod fingerprint;

#[cfg(test)]
mod tests;

use crate::{identity::ColumnIdentifier, value::Value};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

// re-exports
pub use condition::{Condition, Inclusion};
pub use filter::Filter;
pub use fingerprint::PredicateFingerprint;

/// Reads one column of an entity as a type-erased value, `None` for null.
pub(crate) type ValueReader<E> = Arc<dyn Fn(&E) -> Option<Value> + Send + Sync>;

///
/// PredicateKind
///
/// Positive operator a predicate was built from.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum PredicateKind {
    Equal,
    GreaterThan,
    GreaterOrEqual,
    Between,
    In,
}

///
/// PredicateType
///
/// Effective operator after negation, for downstream translation.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum PredicateType {
    Equal,
    NotEqual,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
    LessThan,
    Between,
    NotBetween,
    In,
    NotIn,
}

impl PredicateType {
    /// Rewrite table from a positive operator and negation flag.
    #[must_use]
    pub const fn resolve(kind: PredicateKind, negated: bool) -> Self {
        match (kind, negated) {
            (PredicateKind::Equal, false) => Self::Equal,
            (PredicateKind::Equal, true) => Self::NotEqual,
            (PredicateKind::GreaterThan, false) => Self::GreaterThan,
            (PredicateKind::GreaterThan, true) => Self::LessOrEqual,
            (PredicateKind::GreaterOrEqual, false) => Self::GreaterOrEqual,
            (PredicateKind::GreaterOrEqual, true) => Self::LessThan,
            (PredicateKind::Between, false) => Self::Between,
            (PredicateKind::Between, true) => Self::NotBetween,
            (PredicateKind::In, false) => Self::In,
            (PredicateKind::In, true) => Self::NotIn,
        }
    }

    /// Operator of the complementary predicate.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self::resolve(self.kind(), !self.is_negated())
    }

    #[must_use]
    pub const fn kind(self) -> PredicateKind {
        match self {
            Self::Equal | Self::NotEqual => PredicateKind::Equal,
            Self::GreaterThan | Self::LessOrEqual => PredicateKind::GreaterThan,
            Self::GreaterOrEqual | Self::LessThan => PredicateKind::GreaterOrEqual,
            Self::Between | Self::NotBetween => PredicateKind::Between,
            Self::In | Self::NotIn => PredicateKind::In,
        }
    }

    #[must_use]
    pub const fn is_negated(self) -> bool {
        matches!(
            self,
            Self::NotEqual | Self::LessOrEqual | Self::LessThan | Self::NotBetween | Self::NotIn
        )
    }

    pub(crate) const fn tag(self) -> u8 {
        match self {
            Self::Equal => 0x01,
            Self::NotEqual => 0x02,
            Self::GreaterThan => 0x03,
            Self::LessOrEqual => 0x04,
            Self::GreaterOrEqual => 0x05,
            Self::LessThan => 0x06,
            Self::Between => 0x07,
            Self::NotBetween => 0x08,
            Self::In => 0x09,
            Self::NotIn => 0x0a,
        }
    }
}

///
/// Predicate
///
/// Pure test over entities of type `E`, bound to one column.
///

pub struct Predicate<E> {
    column: ColumnIdentifier<E>,
    condition: Condition,
    negated: bool,
    reader: ValueReader<E>,
}

impl<E> Predicate<E> {
    pub(crate) const fn new(
        column: ColumnIdentifier<E>,
        condition: Condition,
        reader: ValueReader<E>,
    ) -> Self {
        Self {
            column,
            condition,
            negated: false,
            reader,
        }
    }

    /// Evaluate against one entity.
    ///
    /// A null field value never satisfies the positive condition, so every
    /// negated predicate accepts it.
    #[must_use]
    pub fn test(&self, entity: &E) -> bool {
        let positive = (self.reader)(entity).is_some_and(|value| self.condition.matches(&value));

        positive != self.negated
    }

    /// Exact complement of this predicate.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            negated: !self.negated,
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn column(&self) -> ColumnIdentifier<E> {
        self.column
    }

    #[must_use]
    pub const fn condition(&self) -> &Condition {
        &self.condition
    }

    #[must_use]
    pub const fn kind(&self) -> PredicateKind {
        self.condition.kind()
    }

    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    #[must_use]
    pub const fn predicate_type(&self) -> PredicateType {
        PredicateType::resolve(self.condition.kind(), self.negated)
    }

    /// Boundary strictness, for range predicates only.
    #[must_use]
    pub const fn inclusion(&self) -> Option<Inclusion> {
        self.condition.inclusion()
    }

    #[must_use]
    pub fn and(self, other: impl Into<Filter<E>>) -> Filter<E> {
        Filter::Field(self).and(other)
    }

    #[must_use]
    pub fn or(self, other: impl Into<Filter<E>>) -> Filter<E> {
        Filter::Field(self).or(other)
    }
}

impl<E> Clone for Predicate<E> {
    fn clone(&self) -> Self {
        Self {
            column: self.column,
            condition: self.condition.clone(),
            negated: self.negated,
            reader: Arc::clone(&self.reader),
        }
    }
}

impl<E> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("column", &self.column)
            .field("type", &self.predicate_type())
            .field("condition", &self.condition)
            .finish_non_exhaustive()
    }
}

// Structural equality; the reader is derived from the column and ignored.
impl<E> PartialEq for Predicate<E> {
    fn eq(&self, other: &Self) -> bool {
        self.column == other.column
            && self.negated == other.negated
            && self.condition == other.condition
    }
}
