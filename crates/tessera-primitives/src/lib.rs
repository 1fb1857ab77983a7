//! Closed value-kind vocabulary shared by the field, predicate and
//! comparator layers.
//!
//! Every column value a field can carry belongs to exactly one
//! [`ValueKind`]. Kinds share one capability set (equality, ordering,
//! membership); which capabilities a kind exposes is fixed here, once.

#[macro_use]
mod macros;

use serde::{Deserialize, Serialize};

///
/// ValueKind
///
/// Canonical kind of a column's domain value.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ValueKind {
    Bool,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Text,
}

impl ValueKind {
    /// Return the full metadata descriptor for one kind.
    #[must_use]
    pub const fn metadata(self) -> KindMetadata {
        value_kind_registry!(metadata_from_registry, @args self)
    }

    /// Return the stable lowercase label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.metadata().label
    }

    /// Stable tag byte used by fingerprint encodings.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self.metadata().tag
    }

    /// Return whether equality predicates exist for this kind.
    #[must_use]
    pub const fn supports_equality(self) -> bool {
        self.metadata().supports_equality
    }

    /// Return whether range predicates (greater-than, between) exist for this kind.
    #[must_use]
    pub const fn supports_ordering(self) -> bool {
        self.metadata().supports_ordering
    }

    /// Return whether set-membership predicates exist for this kind.
    #[must_use]
    pub const fn supports_membership(self) -> bool {
        self.metadata().supports_membership
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

///
/// KindMetadata
///
/// Capability metadata for one value kind.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KindMetadata {
    pub label: &'static str,
    pub tag: u8,
    pub supports_equality: bool,
    pub supports_ordering: bool,
    pub supports_membership: bool,
}

/// Ordered list of all value kinds in registry order.
pub const ALL_VALUE_KINDS: [ValueKind; 9] = value_kind_registry!(all_kinds_from_registry);

// Tags feed predicate fingerprints; a duplicate would merge two kinds.
const _: () = {
    let mut i = 0;
    while i < ALL_VALUE_KINDS.len() {
        let mut j = i + 1;
        while j < ALL_VALUE_KINDS.len() {
            assert!(
                ALL_VALUE_KINDS[i].tag() != ALL_VALUE_KINDS[j].tag(),
                "duplicate value kind tag"
            );
            j += 1;
        }
        i += 1;
    }
};

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn registry_order_matches_sorted_enum() {
        let mut sorted = ALL_VALUE_KINDS;
        sorted.sort();

        assert_eq!(sorted, ALL_VALUE_KINDS);
    }

    #[test]
    fn tags_are_unique() {
        let tags: BTreeSet<u8> = ALL_VALUE_KINDS.iter().map(|kind| kind.tag()).collect();

        assert_eq!(tags.len(), ALL_VALUE_KINDS.len());
    }

    #[test]
    fn bool_is_equality_only() {
        let kind = ValueKind::Bool;

        assert!(kind.supports_equality());
        assert!(!kind.supports_ordering());
        assert!(!kind.supports_membership());
    }

    #[test]
    fn every_non_bool_kind_has_the_full_capability_set() {
        for kind in ALL_VALUE_KINDS.into_iter().filter(|k| *k != ValueKind::Bool) {
            assert!(kind.supports_equality(), "{kind}");
            assert!(kind.supports_ordering(), "{kind}");
            assert!(kind.supports_membership(), "{kind}");
        }
    }

    #[test]
    fn labels_render_through_display() {
        assert_eq!(ValueKind::Text.to_string(), "string");
        assert_eq!(ValueKind::Int.to_string(), "int");
    }
}
