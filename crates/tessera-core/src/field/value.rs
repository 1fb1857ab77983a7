use crate::value::{Value, ValueKind};
use std::fmt::Debug;

///
/// FieldValue
///
/// Domain value a field can expose. One implementation per `ValueKind`;
/// every implementation supports equality predicates.
///

pub trait FieldValue: Clone + Debug + PartialEq + Send + Sync + 'static {
    const KIND: ValueKind;

    /// Consume into a `Value` without copying owned data.
    fn into_value(self) -> Value;
}

///
/// ComparableValue
///
/// Marker for domain values with a natural order. Range, membership and
/// ordering operators only exist for these; `bool` is deliberately absent.
///

pub trait ComparableValue: FieldValue + PartialOrd {}

// impl_field_value
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            const _: () = assert!(ValueKind::$variant.supports_equality());

            impl FieldValue for $type {
                const KIND: ValueKind = ValueKind::$variant;

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }
        )*
    };
}

// impl_comparable_value
// The registry must grant ordering and membership to every kind listed here.
macro_rules! impl_comparable_value {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            const _: () = assert!(
                <$type as FieldValue>::KIND.supports_ordering()
                    && <$type as FieldValue>::KIND.supports_membership()
            );

            impl ComparableValue for $type {}
        )*
    };
}

impl_field_value!(
    bool => Bool,
    char => Char,
    f32 => Float,
    f64 => Double,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    String => Text,
);

impl_comparable_value!(char, f32, f64, i8, i16, i32, i64, String);
