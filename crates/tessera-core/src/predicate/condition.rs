use crate::{
    predicate::PredicateKind,
    value::{Value, strict_eq, strict_order_cmp, total_cmp},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Inclusion
///
/// Boundary strictness of a range predicate.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Inclusion {
    StartExclusiveEndExclusive,
    #[default]
    StartInclusiveEndExclusive,
    StartExclusiveEndInclusive,
    StartInclusiveEndInclusive,
}

impl Inclusion {
    pub const ALL: [Self; 4] = [
        Self::StartExclusiveEndExclusive,
        Self::StartInclusiveEndExclusive,
        Self::StartExclusiveEndInclusive,
        Self::StartInclusiveEndInclusive,
    ];

    #[must_use]
    pub const fn is_start_inclusive(self) -> bool {
        matches!(
            self,
            Self::StartInclusiveEndExclusive | Self::StartInclusiveEndInclusive
        )
    }

    #[must_use]
    pub const fn is_end_inclusive(self) -> bool {
        matches!(
            self,
            Self::StartExclusiveEndInclusive | Self::StartInclusiveEndInclusive
        )
    }

    pub(crate) const fn tag(self) -> u8 {
        match self {
            Self::StartExclusiveEndExclusive => 0x01,
            Self::StartInclusiveEndExclusive => 0x02,
            Self::StartExclusiveEndInclusive => 0x03,
            Self::StartInclusiveEndInclusive => 0x04,
        }
    }
}

///
/// Condition
///
/// Positive test applied to a present field value, together with its bound
/// operands. Conditions never match null; null handling is owned by
/// `Predicate`.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Condition {
    Equal(Value),
    GreaterThan(Value),
    GreaterOrEqual(Value),
    Between {
        start: Value,
        end: Value,
        inclusion: Inclusion,
    },
    In(Vec<Value>),
}

impl Condition {
    /// Membership condition over a sorted, duplicate-free operand list.
    /// Signed zeros collapse to one operand.
    #[must_use]
    pub fn in_set(values: impl IntoIterator<Item = Value>) -> Self {
        let mut values: Vec<Value> = values.into_iter().map(Value::normalize_zero).collect();
        values.sort_by(total_cmp);
        values.dedup_by(|a, b| total_cmp(a, b).is_eq());

        Self::In(values)
    }

    #[must_use]
    pub const fn kind(&self) -> PredicateKind {
        match self {
            Self::Equal(_) => PredicateKind::Equal,
            Self::GreaterThan(_) => PredicateKind::GreaterThan,
            Self::GreaterOrEqual(_) => PredicateKind::GreaterOrEqual,
            Self::Between { .. } => PredicateKind::Between,
            Self::In(_) => PredicateKind::In,
        }
    }

    #[must_use]
    pub const fn inclusion(&self) -> Option<Inclusion> {
        match self {
            Self::Between { inclusion, .. } => Some(*inclusion),
            _ => None,
        }
    }

    /// Bound operands in declaration order.
    #[must_use]
    pub fn operands(&self) -> Vec<&Value> {
        match self {
            Self::Equal(value) | Self::GreaterThan(value) | Self::GreaterOrEqual(value) => {
                vec![value]
            }
            Self::Between { start, end, .. } => vec![start, end],
            Self::In(values) => values.iter().collect(),
        }
    }

    /// Evaluate against a present value.
    ///
    /// Mismatched kinds and unordered floating point pairs never match.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Equal(operand) => strict_eq(value, operand) == Some(true),
            Self::GreaterThan(operand) => {
                strict_order_cmp(value, operand) == Some(Ordering::Greater)
            }
            Self::GreaterOrEqual(operand) => matches!(
                strict_order_cmp(value, operand),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Self::Between {
                start,
                end,
                inclusion,
            } => {
                above_start(value, start, *inclusion) && below_end(value, end, *inclusion)
            }
            Self::In(values) => values
                .iter()
                .any(|operand| strict_eq(value, operand) == Some(true)),
        }
    }
}

fn above_start(value: &Value, start: &Value, inclusion: Inclusion) -> bool {
    match strict_order_cmp(value, start) {
        Some(Ordering::Greater) => true,
        Some(Ordering::Equal) => inclusion.is_start_inclusive(),
        _ => false,
    }
}

fn below_end(value: &Value, end: &Value, inclusion: Inclusion) -> bool {
    match strict_order_cmp(value, end) {
        Some(Ordering::Less) => true,
        Some(Ordering::Equal) => inclusion.is_end_inclusive(),
        _ => false,
    }
}
