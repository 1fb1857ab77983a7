use crate::predicate::Predicate;
use std::fmt;

///
/// Filter
///
/// Boolean composition of field predicates. An empty `And` accepts every
/// entity; an empty `Or` accepts none.
///

pub enum Filter<E> {
    Field(Predicate<E>),
    And(Vec<Self>),
    Or(Vec<Self>),
}

impl<E> Filter<E> {
    /// Conjunction, flattening nested `And` nodes.
    #[must_use]
    pub fn and(self, other: impl Into<Self>) -> Self {
        let mut children = match self {
            Self::And(children) => children,
            single => vec![single],
        };
        match other.into() {
            Self::And(more) => children.extend(more),
            single => children.push(single),
        }

        Self::And(children)
    }

    /// Disjunction, flattening nested `Or` nodes.
    #[must_use]
    pub fn or(self, other: impl Into<Self>) -> Self {
        let mut children = match self {
            Self::Or(children) => children,
            single => vec![single],
        };
        match other.into() {
            Self::Or(more) => children.extend(more),
            single => children.push(single),
        }

        Self::Or(children)
    }

    /// Exact complement, pushed down to the leaves by De Morgan.
    #[must_use]
    pub fn negate(&self) -> Self {
        match self {
            Self::Field(predicate) => Self::Field(predicate.negate()),
            Self::And(children) => Self::Or(children.iter().map(Self::negate).collect()),
            Self::Or(children) => Self::And(children.iter().map(Self::negate).collect()),
        }
    }

    #[must_use]
    pub fn test(&self, entity: &E) -> bool {
        match self {
            Self::Field(predicate) => predicate.test(entity),
            Self::And(children) => children.iter().all(|child| child.test(entity)),
            Self::Or(children) => children.iter().any(|child| child.test(entity)),
        }
    }
}

impl<E> From<Predicate<E>> for Filter<E> {
    fn from(predicate: Predicate<E>) -> Self {
        Self::Field(predicate)
    }
}

impl<E> Clone for Filter<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(predicate) => Self::Field(predicate.clone()),
            Self::And(children) => Self::And(children.clone()),
            Self::Or(children) => Self::Or(children.clone()),
        }
    }
}

impl<E> fmt::Debug for Filter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(predicate) => fmt::Debug::fmt(predicate, f),
            Self::And(children) => f.debug_tuple("And").field(children).finish(),
            Self::Or(children) => f.debug_tuple("Or").field(children).finish(),
        }
    }
}

impl<E> PartialEq for Filter<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Field(a), Self::Field(b)) => a == b,
            (Self::And(a), Self::And(b)) | (Self::Or(a), Self::Or(b)) => a == b,
            _ => false,
        }
    }
}
