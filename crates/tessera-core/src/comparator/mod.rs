//! Entity ordering by one field.

#[cfg(test)]
mod tests;

use crate::{
    identity::ColumnIdentifier,
    predicate::ValueReader,
    value::total_cmp,
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, sync::Arc};

///
/// NullOrder
///
/// Where entities with a null field value rank.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum NullOrder {
    First,
    #[default]
    Last,
}

///
/// FieldComparator
///
/// Orders entities ascending by one field's value. Floating point uses the
/// IEEE total order so the ordering is total. Ties are genuine equality.
///

pub struct FieldComparator<E> {
    column: ColumnIdentifier<E>,
    reader: ValueReader<E>,
    nullable: bool,
    null_order: NullOrder,
    reversed: bool,
}

impl<E> FieldComparator<E> {
    pub(crate) const fn new(
        column: ColumnIdentifier<E>,
        reader: ValueReader<E>,
        nullable: bool,
        null_order: NullOrder,
    ) -> Self {
        Self {
            column,
            reader,
            nullable,
            null_order,
            reversed: false,
        }
    }

    #[must_use]
    pub fn compare(&self, left: &E, right: &E) -> Ordering {
        match ((self.reader)(left), (self.reader)(right)) {
            (Some(left), Some(right)) => {
                let ord = total_cmp(&left, &right);
                if self.reversed { ord.reverse() } else { ord }
            }
            (None, None) => Ordering::Equal,
            (None, Some(_)) => self.null_rank(),
            (Some(_), None) => self.null_rank().reverse(),
        }
    }

    /// Same comparator with present values in descending order. Null
    /// placement is kept.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    #[must_use]
    pub const fn null_order(&self) -> NullOrder {
        self.null_order
    }

    #[must_use]
    pub const fn column(&self) -> ColumnIdentifier<E> {
        self.column
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    // rank of a null value against a present one
    const fn null_rank(&self) -> Ordering {
        match self.null_order {
            NullOrder::First => Ordering::Less,
            NullOrder::Last => Ordering::Greater,
        }
    }
}

impl<E> Clone for FieldComparator<E> {
    fn clone(&self) -> Self {
        Self {
            column: self.column,
            reader: Arc::clone(&self.reader),
            nullable: self.nullable,
            null_order: self.null_order,
            reversed: self.reversed,
        }
    }
}

impl<E> fmt::Debug for FieldComparator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldComparator")
            .field("column", &self.column)
            .field("null_order", &self.null_order)
            .field("reversed", &self.reversed)
            .finish_non_exhaustive()
    }
}

impl<E> PartialEq for FieldComparator<E> {
    fn eq(&self, other: &Self) -> bool {
        self.column == other.column
            && self.null_order == other.null_order
            && self.reversed == other.reversed
    }
}
