use crate::{
    error::{ConfigurationError, Error},
    field::{Field, FieldValue, ForeignKeyField, Getter, Setter},
    identity::ColumnIdentifier,
    mapper::{IdentityMapper, TypeMapper},
};
use std::sync::Arc;

///
/// FieldBuilder
///
/// Collects the parts of a field. `build` rejects any missing part, so
/// there is no partially configured field.
///

pub struct FieldBuilder<E, D, V> {
    identifier: ColumnIdentifier<E>,
    getter: Option<Getter<E, V>>,
    setter: Option<Setter<E, V>>,
    type_mapper: Option<Arc<dyn TypeMapper<D, V>>>,
    unique: bool,
}

impl<E, D, V> FieldBuilder<E, D, V>
where
    E: 'static,
    D: 'static,
    V: FieldValue,
{
    #[must_use]
    pub const fn new(identifier: ColumnIdentifier<E>) -> Self {
        Self {
            identifier,
            getter: None,
            setter: None,
            type_mapper: None,
            unique: false,
        }
    }

    #[must_use]
    pub fn getter(mut self, read: impl Fn(&E) -> V + Send + Sync + 'static) -> Self {
        self.getter = Some(Getter::required(read));
        self
    }

    #[must_use]
    pub fn nullable_getter(
        mut self,
        read: impl Fn(&E) -> Option<V> + Send + Sync + 'static,
    ) -> Self {
        self.getter = Some(Getter::nullable(read));
        self
    }

    #[must_use]
    pub fn setter(mut self, write: impl Fn(&mut E, V) + Send + Sync + 'static) -> Self {
        self.setter = Some(Setter::required(write));
        self
    }

    #[must_use]
    pub fn nullable_setter(
        mut self,
        write: impl Fn(&mut E, Option<V>) + Send + Sync + 'static,
    ) -> Self {
        self.setter = Some(Setter::nullable(write));
        self
    }

    #[must_use]
    pub fn type_mapper(mut self, type_mapper: impl TypeMapper<D, V> + 'static) -> Self {
        self.type_mapper = Some(Arc::new(type_mapper));
        self
    }

    #[must_use]
    pub const fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn build(self) -> Result<Field<E, D, V>, Error> {
        let column = self.identifier;

        self.into_parts()
            .map(|(getter, setter, type_mapper, unique)| {
                Field::from_parts(column, getter, setter, type_mapper, unique)
            })
            .map_err(|err| {
                tracing::debug!(column = %column, error = %err, "field construction rejected");
                Error::from(err)
            })
    }

    /// Build a foreign-key field referencing `referenced`.
    pub fn build_foreign_key<T: 'static>(
        self,
        referenced: Field<T, D, V>,
    ) -> Result<ForeignKeyField<E, D, V, T>, Error> {
        let field = self.build()?;

        Ok(ForeignKeyField::new(field, referenced))
    }

    fn into_parts(
        self,
    ) -> Result<(Getter<E, V>, Setter<E, V>, Arc<dyn TypeMapper<D, V>>, bool), ConfigurationError>
    {
        self.identifier.validate()?;

        let column = || self.identifier.to_string();
        let getter = self
            .getter
            .ok_or_else(|| ConfigurationError::MissingGetter { column: column() })?;
        let setter = self
            .setter
            .ok_or_else(|| ConfigurationError::MissingSetter { column: column() })?;
        let type_mapper = self
            .type_mapper
            .ok_or_else(|| ConfigurationError::MissingTypeMapper { column: column() })?;

        if getter.is_nullable() != setter.is_nullable() {
            return Err(ConfigurationError::NullabilityMismatch { column: column() });
        }

        Ok((getter, setter, type_mapper, self.unique))
    }
}

impl<E, V> FieldBuilder<E, V, V>
where
    E: 'static,
    V: FieldValue,
{
    /// Builder preset with the identity mapper, for columns stored as-is.
    #[must_use]
    pub fn identity(identifier: ColumnIdentifier<E>) -> Self {
        Self::new(identifier).type_mapper(IdentityMapper::<V>::new())
    }
}
