//! ## Crate layout
//! - `core`: fields, predicates, comparators, type mappers and foreign-key
//!   navigation.
//! - `primitives`: the closed value-kind registry shared by every field.
//!
//! The `prelude` module carries the vocabulary generated entity code uses.

pub use tessera_core as core;
pub use tessera_primitives as primitives;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::Error;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        field::FieldBuilder,
        mapper::{IdentityMapper, TypeMapper as _},
        navigation::SnapshotSupplier as _,
        prelude::*,
    };
    pub use crate::primitives::ValueKind;
}
