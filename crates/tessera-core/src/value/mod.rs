mod compare;


use serde::{Deserialize, Serialize};
use std::fmt;

// re-exports
pub use compare::{strict_eq, strict_order_cmp, total_cmp};
pub use tessera_primitives::ValueKind;

///
/// Value
///
/// Type-erased operand carried by predicates.
/// One variant per `ValueKind`; null is never a `Value`, it is the absence
/// of one.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Byte(i8),
    Char(char),
    Double(f64),
    Float(f32),
    Int(i32),
    Long(i64),
    Short(i16),
    Text(String),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Byte(_) => ValueKind::Byte,
            Self::Char(_) => ValueKind::Char,
            Self::Double(_) => ValueKind::Double,
            Self::Float(_) => ValueKind::Float,
            Self::Int(_) => ValueKind::Int,
            Self::Long(_) => ValueKind::Long,
            Self::Short(_) => ValueKind::Short,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Fold negative zero into positive zero; every other value is unchanged.
    ///
    /// `-0.0 == 0.0` under strict equality, so canonical encodings must not
    /// tell them apart.
    #[must_use]
    pub fn normalize_zero(self) -> Self {
        match self {
            Self::Double(v) if v == 0.0 => Self::Double(0.0),
            Self::Float(v) if v == 0.0 => Self::Float(0.0),
            other => other,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v:?}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Short(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
        }
    }
}
