//! Opaque table and column identity handles.
//!
//! Handles are supplied by the metadata layer and used only for identity:
//! equality, hashing, display and fingerprinting. The core never looks
//! behind the names.

use crate::error::ConfigurationError;
use serde::Serialize;
use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

///
/// TableIdentifier
///
/// Identity of one table holding entities of type `E`.
///

#[derive(Serialize)]
#[serde(bound = "")]
pub struct TableIdentifier<E> {
    dbms: &'static str,
    schema: &'static str,
    table: &'static str,
    #[serde(skip)]
    _marker: PhantomData<fn() -> E>,
}

impl<E> TableIdentifier<E> {
    #[must_use]
    pub const fn new(dbms: &'static str, schema: &'static str, table: &'static str) -> Self {
        Self {
            dbms,
            schema,
            table,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn dbms_name(&self) -> &'static str {
        self.dbms
    }

    #[must_use]
    pub const fn schema_name(&self) -> &'static str {
        self.schema
    }

    #[must_use]
    pub const fn table_name(&self) -> &'static str {
        self.table
    }

    /// Identify one column of this table.
    #[must_use]
    pub const fn column(self, column: &'static str) -> ColumnIdentifier<E> {
        ColumnIdentifier { table: self, column }
    }

    /// Reject identifiers with an empty name part.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (part, name) in [
            ("dbms", self.dbms),
            ("schema", self.schema),
            ("table", self.table),
        ] {
            if name.is_empty() {
                return Err(ConfigurationError::EmptyIdentifier { part });
            }
        }

        Ok(())
    }
}

#[allow(clippy::expl_impl_clone_on_copy)]
impl<E> Clone for TableIdentifier<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for TableIdentifier<E> {}

impl<E> PartialEq for TableIdentifier<E> {
    fn eq(&self, other: &Self) -> bool {
        self.dbms == other.dbms && self.schema == other.schema && self.table == other.table
    }
}

impl<E> Eq for TableIdentifier<E> {}

impl<E> Hash for TableIdentifier<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dbms.hash(state);
        self.schema.hash(state);
        self.table.hash(state);
    }
}

impl<E> fmt::Debug for TableIdentifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableIdentifier({self})")
    }
}

impl<E> fmt::Display for TableIdentifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.dbms, self.schema, self.table)
    }
}

///
/// ColumnIdentifier
///
/// Identity of exactly one column of exactly one table.
///

#[derive(Serialize)]
#[serde(bound = "")]
pub struct ColumnIdentifier<E> {
    table: TableIdentifier<E>,
    column: &'static str,
}

impl<E> ColumnIdentifier<E> {
    #[must_use]
    pub const fn new(
        dbms: &'static str,
        schema: &'static str,
        table: &'static str,
        column: &'static str,
    ) -> Self {
        TableIdentifier::new(dbms, schema, table).column(column)
    }

    #[must_use]
    pub const fn table(&self) -> TableIdentifier<E> {
        self.table
    }

    #[must_use]
    pub const fn column_name(&self) -> &'static str {
        self.column
    }

    /// Reject identifiers with an empty name part.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.table.validate()?;
        if self.column.is_empty() {
            return Err(ConfigurationError::EmptyIdentifier { part: "column" });
        }

        Ok(())
    }
}

#[allow(clippy::expl_impl_clone_on_copy)]
impl<E> Clone for ColumnIdentifier<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ColumnIdentifier<E> {}

impl<E> PartialEq for ColumnIdentifier<E> {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table && self.column == other.column
    }
}

impl<E> Eq for ColumnIdentifier<E> {}

impl<E> Hash for ColumnIdentifier<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        self.column.hash(state);
    }
}

impl<E> fmt::Debug for ColumnIdentifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnIdentifier({self})")
    }
}

impl<E> fmt::Display for ColumnIdentifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

///
/// TESTS
///
