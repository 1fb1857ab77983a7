use crate::value::Value;
use std::cmp::Ordering;

/// Strict equality between two values of the same kind.
///
/// Returns `None` for mismatched kinds. Floating point follows IEEE rules,
/// so `NaN` equals nothing and `-0.0 == 0.0`.
#[must_use]
pub fn strict_eq(left: &Value, right: &Value) -> Option<bool> {
    strict_order_cmp(left, right)
        .map(Ordering::is_eq)
        .or_else(|| (left.kind() == right.kind()).then_some(false))
}

/// Strict comparator for identical kinds.
///
/// Returns `None` for mismatched kinds and for unordered floating-point
/// pairs (`NaN` on either side).
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Byte(a), Value::Byte(b)) => Some(a.cmp(b)),
        (Value::Char(a), Value::Char(b)) => Some(a.cmp(b)),
        (Value::Double(a), Value::Double(b)) => a.partial_cmp(b),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Long(a), Value::Long(b)) => Some(a.cmp(b)),
        (Value::Short(a), Value::Short(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Total comparator used for deterministic normalization.
///
/// Same-kind values compare by their natural order, floating point by IEEE
/// total order. Mixed kinds fall back to the kind tag so the result stays
/// deterministic.
#[must_use]
pub fn total_cmp(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Double(a), Value::Double(b)) => a.total_cmp(b),
        (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
        _ => strict_order_cmp(left, right)
            .unwrap_or_else(|| left.kind().tag().cmp(&right.kind().tag())),
    }
}
