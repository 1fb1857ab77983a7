///
/// value_kind_registry
///
/// Single source of truth for per-kind capability metadata.
/// Entries are `(kind, label, tag, ordering, membership)`.
/// Tags are part of predicate fingerprints and must never be renumbered.
///

macro_rules! value_kind_registry {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Bool, "boolean", 0x01, supports_ordering = false, supports_membership = false),
            (Byte, "byte", 0x02, supports_ordering = true, supports_membership = true),
            (Char, "char", 0x03, supports_ordering = true, supports_membership = true),
            (Double, "double", 0x04, supports_ordering = true, supports_membership = true),
            (Float, "float", 0x05, supports_ordering = true, supports_membership = true),
            (Int, "int", 0x06, supports_ordering = true, supports_membership = true),
            (Long, "long", 0x07, supports_ordering = true, supports_membership = true),
            (Short, "short", 0x08, supports_ordering = true, supports_membership = true),
            (Text, "string", 0x09, supports_ordering = true, supports_membership = true),
        }
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($name:ident, $label:literal, $tag:literal, supports_ordering = $ordering:expr, supports_membership = $membership:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ValueKind::$name => $crate::KindMetadata {
                    label: $label,
                    tag: $tag,
                    supports_equality: true,
                    supports_ordering: $ordering,
                    supports_membership: $membership,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($name:ident, $label:literal, $tag:literal, supports_ordering = $ordering:expr, supports_membership = $membership:expr) ),* $(,)? ) => {
        [ $( $crate::ValueKind::$name ),* ]
    };
}
