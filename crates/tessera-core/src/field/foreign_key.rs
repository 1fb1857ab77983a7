use crate::{
    error::Error,
    field::{Field, FieldBuilder, FieldValue},
    identity::{ColumnIdentifier, TableIdentifier},
    mapper::TypeMapper,
    navigation::{BackwardFinder, Finder, SnapshotSupplier},
};
use derive_more::Deref;
use std::fmt;

///
/// ForeignKeyField
///
/// Field of `E` whose value references a field of target entity `T`.
/// Both sides share the stored type `D` and the domain type `V`.
/// Dereferences to the source field, so every field operator applies.
///

#[derive(Deref)]
pub struct ForeignKeyField<E, D, V, T> {
    #[deref]
    field: Field<E, D, V>,
    referenced: Field<T, D, V>,
}

impl<E, D, V, T> ForeignKeyField<E, D, V, T>
where
    E: 'static,
    D: 'static,
    V: FieldValue,
    T: 'static,
{
    #[must_use]
    pub const fn new(field: Field<E, D, V>, referenced: Field<T, D, V>) -> Self {
        Self { field, referenced }
    }

    /// Build a non-nullable foreign key in one call.
    pub fn create(
        identifier: ColumnIdentifier<E>,
        getter: impl Fn(&E) -> V + Send + Sync + 'static,
        setter: impl Fn(&mut E, V) + Send + Sync + 'static,
        referenced: Field<T, D, V>,
        type_mapper: impl TypeMapper<D, V> + 'static,
        unique: bool,
    ) -> Result<Self, Error> {
        FieldBuilder::new(identifier)
            .getter(getter)
            .setter(setter)
            .type_mapper(type_mapper)
            .unique(unique)
            .build_foreign_key(referenced)
    }

    #[must_use]
    pub const fn field(&self) -> &Field<E, D, V> {
        &self.field
    }

    #[must_use]
    pub const fn referenced_field(&self) -> &Field<T, D, V> {
        &self.referenced
    }

    /// Forward navigation from a source entity to the target it references,
    /// resolved against snapshots of `table`.
    #[must_use]
    pub fn finder<S>(&self, table: TableIdentifier<T>, supplier: S) -> Finder<E, D, V, T, S>
    where
        S: SnapshotSupplier<T>,
    {
        Finder::new(self.clone(), table, supplier)
    }

    /// Reverse navigation from a target entity to every source entity in
    /// snapshots of `table` that references it.
    #[must_use]
    pub fn backward_finder<S>(
        &self,
        table: TableIdentifier<E>,
        supplier: S,
    ) -> BackwardFinder<E, D, V, T, S>
    where
        S: SnapshotSupplier<E>,
    {
        BackwardFinder::new(self.clone(), table, supplier)
    }
}

impl<E, D, V, T> Clone for ForeignKeyField<E, D, V, T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            referenced: self.referenced.clone(),
        }
    }
}

impl<E, D, V, T> fmt::Debug for ForeignKeyField<E, D, V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignKeyField")
            .field("field", &self.field)
            .field("referenced", &self.referenced)
            .finish()
    }
}
