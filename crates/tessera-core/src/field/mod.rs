//! Typed fields: one column of one entity, with its accessors and mapper.
//!
//! Fields are built once from generated metadata and shared read-only.
//! Every operator on a field yields a fresh predicate or comparator.

mod accessor;
mod builder;
mod foreign_key;
mod value;


use crate::{
    comparator::{FieldComparator, NullOrder},
    error::{ConfigurationError, Error},
    identity::ColumnIdentifier,
    mapper::TypeMapper,
    predicate::{Condition, Inclusion, Predicate, ValueReader},
    value::ValueKind,
};
use std::{fmt, sync::Arc};

// re-exports
pub use accessor::{Getter, Setter};
pub use builder::FieldBuilder;
pub use foreign_key::ForeignKeyField;
pub use value::{ComparableValue, FieldValue};

// typed aliases, one per value kind
pub type BooleanField<E, D = bool> = Field<E, D, bool>;
pub type ByteField<E, D = i8> = Field<E, D, i8>;
pub type CharField<E, D = char> = Field<E, D, char>;
pub type DoubleField<E, D = f64> = Field<E, D, f64>;
pub type FloatField<E, D = f32> = Field<E, D, f32>;
pub type IntField<E, D = i32> = Field<E, D, i32>;
pub type LongField<E, D = i64> = Field<E, D, i64>;
pub type ShortField<E, D = i16> = Field<E, D, i16>;
pub type StringField<E, D = String> = Field<E, D, String>;

///
/// Field
///
/// Column of entity `E` stored as `D` and exposed as domain value `V`.
/// Cloning shares the underlying definition.
///

pub struct Field<E, D, V> {
    inner: Arc<FieldInner<E, D, V>>,
}

struct FieldInner<E, D, V> {
    identifier: ColumnIdentifier<E>,
    getter: Getter<E, V>,
    setter: Setter<E, V>,
    type_mapper: Arc<dyn TypeMapper<D, V>>,
    unique: bool,
}

impl<E, D, V> Field<E, D, V>
where
    E: 'static,
    D: 'static,
    V: FieldValue,
{
    #[must_use]
    pub fn builder(identifier: ColumnIdentifier<E>) -> FieldBuilder<E, D, V> {
        FieldBuilder::new(identifier)
    }

    /// Build a non-nullable field in one call.
    pub fn create(
        identifier: ColumnIdentifier<E>,
        getter: impl Fn(&E) -> V + Send + Sync + 'static,
        setter: impl Fn(&mut E, V) + Send + Sync + 'static,
        type_mapper: impl TypeMapper<D, V> + 'static,
        unique: bool,
    ) -> Result<Self, Error> {
        FieldBuilder::new(identifier)
            .getter(getter)
            .setter(setter)
            .type_mapper(type_mapper)
            .unique(unique)
            .build()
    }

    pub(crate) fn from_parts(
        identifier: ColumnIdentifier<E>,
        getter: Getter<E, V>,
        setter: Setter<E, V>,
        type_mapper: Arc<dyn TypeMapper<D, V>>,
        unique: bool,
    ) -> Self {
        Self {
            inner: Arc::new(FieldInner {
                identifier,
                getter,
                setter,
                type_mapper,
                unique,
            }),
        }
    }

    // ------------------------------------------------------------------
    // Metadata
    // ------------------------------------------------------------------

    #[must_use]
    pub fn identifier(&self) -> ColumnIdentifier<E> {
        self.inner.identifier
    }

    #[must_use]
    pub fn getter(&self) -> &Getter<E, V> {
        &self.inner.getter
    }

    #[must_use]
    pub fn setter(&self) -> &Setter<E, V> {
        &self.inner.setter
    }

    #[must_use]
    pub fn type_mapper(&self) -> &dyn TypeMapper<D, V> {
        self.inner.type_mapper.as_ref()
    }

    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.inner.unique
    }

    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.inner.getter.is_nullable()
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        V::KIND
    }

    // ------------------------------------------------------------------
    // Entity access
    // ------------------------------------------------------------------

    /// Current value, `None` when the field is null.
    #[must_use]
    pub fn get(&self, entity: &E) -> Option<V> {
        self.inner.getter.get(entity)
    }

    #[must_use]
    pub fn is_null_in(&self, entity: &E) -> bool {
        self.get(entity).is_none()
    }

    pub fn set(&self, entity: &mut E, value: V) {
        self.inner.setter.set(entity, value);
    }

    /// Store null, failing on a non-nullable field.
    pub fn set_null(&self, entity: &mut E) -> Result<(), Error> {
        if self.inner.setter.set_null(entity) {
            Ok(())
        } else {
            Err(ConfigurationError::NotNullable {
                column: self.identifier().to_string(),
            }
            .into())
        }
    }

    /// Map a stored value through the type mapper and set it.
    pub fn load(&self, entity: &mut E, stored: D) -> Result<(), Error> {
        let value = self.inner.type_mapper.map(stored)?;
        self.set(entity, value);

        Ok(())
    }

    /// Current value in its stored representation, `None` when null.
    pub fn to_database(&self, entity: &E) -> Result<Option<D>, Error> {
        self.get(entity)
            .map(|value| self.inner.type_mapper.reverse(value))
            .transpose()
            .map_err(Error::from)
    }

    // ------------------------------------------------------------------
    // Equality predicates
    // ------------------------------------------------------------------

    #[must_use]
    pub fn equal(&self, value: V) -> Predicate<E> {
        self.predicate(Condition::Equal(value.into_value()))
    }

    #[must_use]
    pub fn not_equal(&self, value: V) -> Predicate<E> {
        self.equal(value).negate()
    }

    // ------------------------------------------------------------------
    // Comparators
    // ------------------------------------------------------------------

    /// Ascending by value; nulls rank last on a nullable field.
    #[must_use]
    pub fn comparator(&self) -> FieldComparator<E> {
        self.comparator_with(NullOrder::Last)
    }

    /// Same as `comparator` unless the field is nullable.
    #[must_use]
    pub fn comparator_null_fields_first(&self) -> FieldComparator<E> {
        if self.is_nullable() {
            self.comparator_with(NullOrder::First)
        } else {
            self.comparator()
        }
    }

    /// Same as `comparator` unless the field is nullable.
    #[must_use]
    pub fn comparator_null_fields_last(&self) -> FieldComparator<E> {
        if self.is_nullable() {
            self.comparator_with(NullOrder::Last)
        } else {
            self.comparator()
        }
    }

    fn comparator_with(&self, null_order: NullOrder) -> FieldComparator<E> {
        FieldComparator::new(
            self.identifier(),
            self.reader(),
            self.is_nullable(),
            null_order,
        )
    }

    fn predicate(&self, condition: Condition) -> Predicate<E> {
        Predicate::new(self.identifier(), condition, self.reader())
    }

    // type-erased read of this column
    fn reader(&self) -> ValueReader<E> {
        let getter = self.inner.getter.clone();

        Arc::new(move |entity: &E| getter.get(entity).map(FieldValue::into_value))
    }
}

impl<E, D, V> Field<E, D, V>
where
    E: 'static,
    D: 'static,
    V: ComparableValue,
{
    // ------------------------------------------------------------------
    // Range predicates
    // ------------------------------------------------------------------

    #[must_use]
    pub fn greater_than(&self, value: V) -> Predicate<E> {
        self.predicate(Condition::GreaterThan(value.into_value()))
    }

    #[must_use]
    pub fn greater_or_equal(&self, value: V) -> Predicate<E> {
        self.predicate(Condition::GreaterOrEqual(value.into_value()))
    }

    #[must_use]
    pub fn less_than(&self, value: V) -> Predicate<E> {
        self.greater_or_equal(value).negate()
    }

    #[must_use]
    pub fn less_or_equal(&self, value: V) -> Predicate<E> {
        self.greater_than(value).negate()
    }

    #[must_use]
    pub fn between(&self, start: V, end: V, inclusion: Inclusion) -> Predicate<E> {
        self.predicate(Condition::Between {
            start: start.into_value(),
            end: end.into_value(),
            inclusion,
        })
    }

    #[must_use]
    pub fn not_between(&self, start: V, end: V, inclusion: Inclusion) -> Predicate<E> {
        self.between(start, end, inclusion).negate()
    }

    // ------------------------------------------------------------------
    // Membership predicates
    // ------------------------------------------------------------------

    #[must_use]
    pub fn in_set(&self, values: impl IntoIterator<Item = V>) -> Predicate<E> {
        self.predicate(Condition::in_set(
            values.into_iter().map(FieldValue::into_value),
        ))
    }

    #[must_use]
    pub fn not_in(&self, values: impl IntoIterator<Item = V>) -> Predicate<E> {
        self.in_set(values).negate()
    }
}

impl<E, D, V> Clone for Field<E, D, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E, D, V> fmt::Debug for Field<E, D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("identifier", &self.inner.identifier)
            .field("getter", &self.inner.getter)
            .field("type_mapper", &self.inner.type_mapper.label())
            .field("unique", &self.inner.unique)
            .finish_non_exhaustive()
    }
}
