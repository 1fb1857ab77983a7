use crate::{
    field::{Field, FieldValue, ForeignKeyField},
    identity::{ColumnIdentifier, TableIdentifier},
    navigation::{
        SnapshotSupplier,
        trace::{NavigationDirection, NavigationTraceEvent, NavigationTraceSink, emit},
    },
};
use std::fmt;

///
/// BackwardFinder
///
/// Yields every source entity whose foreign key references a given target.
///

pub struct BackwardFinder<E, D, V, T, S> {
    field: ForeignKeyField<E, D, V, T>,
    table: TableIdentifier<E>,
    supplier: S,
    trace: Option<&'static dyn NavigationTraceSink>,
}

impl<E, D, V, T, S> BackwardFinder<E, D, V, T, S>
where
    E: 'static,
    D: 'static,
    V: FieldValue,
    T: 'static,
    S: SnapshotSupplier<E>,
{
    pub(crate) const fn new(
        field: ForeignKeyField<E, D, V, T>,
        table: TableIdentifier<E>,
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
    pub const fn table(&self) -> TableIdentifier<E> {
        self.table
    }

    /// Lazily iterate the source entities referencing `target`, in snapshot
    /// order. Each call takes a fresh snapshot. A target whose referenced
    /// value is null is referenced by nothing.
    pub fn find(&self, target: &T) -> BackwardMatches<'_, E, D, V, T, S::Snapshot> {
        BackwardMatches {
            field: &self.field,
            column: self.field.identifier(),
            key: self.target_field().get(target),
            rows: self.supplier.snapshot(),
            scanned: 0,
            matched: 0,
            trace: self.trace,
        }
    }
}

impl<E, D, V, T, S> fmt::Debug for BackwardFinder<E, D, V, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackwardFinder")
            .field("field", &self.field)
            .field("table", &self.table)
            .field("traced", &self.trace.is_some())
            .finish_non_exhaustive()
    }
}

///
/// BackwardMatches
///
/// Lazy iterator returned by `BackwardFinder::find`. Reports the scan when
/// dropped.
///

pub struct BackwardMatches<'a, E, D, V, T, I> {
    field: &'a ForeignKeyField<E, D, V, T>,
    column: ColumnIdentifier<E>,
    key: Option<V>,
    rows: I,
    scanned: u64,
    matched: u64,
    trace: Option<&'static dyn NavigationTraceSink>,
}

impl<E, D, V, T, I> BackwardMatches<'_, E, D, V, T, I> {
    /// Rows inspected so far.
    #[must_use]
    pub const fn scanned(&self) -> u64 {
        self.scanned
    }

    /// Rows yielded so far.
    #[must_use]
    pub const fn matched(&self) -> u64 {
        self.matched
    }
}

impl<E, D, V, T, I> Iterator for BackwardMatches<'_, E, D, V, T, I>
where
    E: 'static,
    D: 'static,
    V: FieldValue,
    T: 'static,
    I: Iterator<Item = E>,
{
    type Item = E;

    fn next(&mut self) -> Option<E> {
        let key = self.key.as_ref()?;

        for candidate in self.rows.by_ref() {
            self.scanned += 1;
            if self.field.get(&candidate).as_ref() == Some(key) {
                self.matched += 1;
                return Some(candidate);
            }
        }

        None
    }
}

impl<E, D, V, T, I> Drop for BackwardMatches<'_, E, D, V, T, I> {
    fn drop(&mut self) {
        tracing::trace!(
            column = %self.column,
            rows = self.scanned,
            matched = self.matched,
            "backward navigation scanned"
        );
        emit(
            self.trace,
            NavigationTraceEvent::Scanned {
                direction: NavigationDirection::Backward,
                column: self.column.column_name(),
                rows: self.scanned,
                matched: self.matched,
            },
        );
    }
}
