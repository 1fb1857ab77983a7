use crate::{
    error::{Error, NotFoundError},
    field::{Field, FieldValue, ForeignKeyField},
    identity::TableIdentifier,
    navigation::{
        SnapshotSupplier,
        trace::{NavigationDirection, NavigationTraceEvent, NavigationTraceSink, emit},
    },
};
use std::fmt;

///
/// Finder
///
/// Resolves the target entity a source entity's foreign key references.
///

pub struct Finder<E, D, V, T, S> {
    field: ForeignKeyField<E, D, V, T>,
    table: TableIdentifier<T>,
    supplier: S,
    trace: Option<&'static dyn NavigationTraceSink>,
}

impl<E, D, V, T, S> Finder<E, D, V, T, S>
where
    E: 'static,
    D: 'static,
    V: FieldValue,
    T: 'static,
    S: SnapshotSupplier<T>,
{
    pub(crate) const fn new(
        field: ForeignKeyField<E, D, V, T>,
        table: TableIdentifier<T>,
        supplier: S,
    ) -> Self {
        Self {
            field,
            table,
            supplier,
            trace: None,
        }
    }

    #[must_use]
    pub fn with_trace_sink(mut self, sink: &'static dyn NavigationTraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    #[must_use]
    pub const fn source_field(&self) -> &ForeignKeyField<E, D, V, T> {
        &self.field
    }

    #[must_use]
    pub const fn target_field(&self) -> &Field<T, D, V> {
        self.field.referenced_field()
    }

    #[must_use]
    pub const fn table(&self) -> TableIdentifier<T> {
        self.table
    }

    /// Find the target referenced by `entity`.
    ///
    /// Scans a fresh snapshot and returns the first target whose referenced
    /// field equals the entity's key. A null key or an exhausted snapshot
    /// fails with `Error::NotFound`.
    pub fn find(&self, entity: &E) -> Result<T, Error> {
        let column = self.field.identifier();

        let Some(key) = self.field.get(entity) else {
            tracing::debug!(column = %column, target = %self.table, "foreign key is null");
            self.miss(0);

            return Err(NotFoundError::NullKey {
                source_column: column.to_string(),
                target: self.table.to_string(),
            }
            .into());
        };

        let referenced = self.target_field();
        let mut rows = 0u64;
        for candidate in self.supplier.snapshot() {
            rows += 1;
            if referenced.get(&candidate).as_ref() == Some(&key) {
                tracing::trace!(
                    column = %column,
                    target = %self.table,
                    rows,
                    unique = referenced.is_unique(),
                    "foreign key resolved"
                );
                emit(
                    self.trace,
                    NavigationTraceEvent::Scanned {
                        direction: NavigationDirection::Forward,
                        column: column.column_name(),
                        rows,
                        matched: 1,
                    },
                );

                return Ok(candidate);
            }
        }

        tracing::debug!(
            column = %column,
            target = %self.table,
            rows,
            key = ?key,
            "foreign key unresolved"
        );
        self.miss(rows);

        Err(NotFoundError::NoMatch {
            source_column: column.to_string(),
            target: self.table.to_string(),
            key: key.into_value(),
        }
        .into())
    }

    fn miss(&self, rows: u64) {
        emit(
            self.trace,
            NavigationTraceEvent::Miss {
                direction: NavigationDirection::Forward,
                column: self.field.identifier().column_name(),
                rows,
            },
        );
    }
}

impl<E, D, V, T, S> fmt::Debug for Finder<E, D, V, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Finder")
            .field("field", &self.field)
            .field("table", &self.table)
            .field("traced", &self.trace.is_some())
            .finish_non_exhaustive()
    }
}
