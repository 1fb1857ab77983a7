use std::{fmt, sync::Arc};

///
/// Getter
///
/// Reads a field's domain value from an entity. A nullable getter may
/// report absence; a required getter always yields a value.
///

pub enum Getter<E, V> {
    Required(Arc<dyn Fn(&E) -> V + Send + Sync>),
    Nullable(Arc<dyn Fn(&E) -> Option<V> + Send + Sync>),
}

impl<E, V> Getter<E, V> {
    pub fn required(read: impl Fn(&E) -> V + Send + Sync + 'static) -> Self {
        Self::Required(Arc::new(read))
    }

    pub fn nullable(read: impl Fn(&E) -> Option<V> + Send + Sync + 'static) -> Self {
        Self::Nullable(Arc::new(read))
    }

    /// Read the value, `None` meaning null.
    #[must_use]
    pub fn get(&self, entity: &E) -> Option<V> {
        match self {
            Self::Required(read) => Some(read(entity)),
            Self::Nullable(read) => read(entity),
        }
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }
}

impl<E, V> Clone for Getter<E, V> {
    fn clone(&self) -> Self {
        match self {
            Self::Required(read) => Self::Required(Arc::clone(read)),
            Self::Nullable(read) => Self::Nullable(Arc::clone(read)),
        }
    }
}

impl<E, V> fmt::Debug for Getter<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(_) => f.write_str("Getter::Required"),
            Self::Nullable(_) => f.write_str("Getter::Nullable"),
        }
    }
}

///
/// Setter
///
/// Writes a field's domain value into an entity. Only a nullable setter
/// can store null.
///

pub enum Setter<E, V> {
    Required(Arc<dyn Fn(&mut E, V) + Send + Sync>),
    Nullable(Arc<dyn Fn(&mut E, Option<V>) + Send + Sync>),
}

impl<E, V> Setter<E, V> {
    pub fn required(write: impl Fn(&mut E, V) + Send + Sync + 'static) -> Self {
        Self::Required(Arc::new(write))
    }

    pub fn nullable(write: impl Fn(&mut E, Option<V>) + Send + Sync + 'static) -> Self {
        Self::Nullable(Arc::new(write))
    }

    pub fn set(&self, entity: &mut E, value: V) {
        match self {
            Self::Required(write) => write(entity, value),
            Self::Nullable(write) => write(entity, Some(value)),
        }
    }

    /// Store null. Returns `false` without touching the entity when the
    /// setter cannot represent null.
    pub fn set_null(&self, entity: &mut E) -> bool {
        match self {
            Self::Required(_) => false,
            Self::Nullable(write) => {
                write(entity, None);
                true
            }
        }
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }
}

impl<E, V> Clone for Setter<E, V> {
    fn clone(&self) -> Self {
        match self {
            Self::Required(write) => Self::Required(Arc::clone(write)),
            Self::Nullable(write) => Self::Nullable(Arc::clone(write)),
        }
    }
}

impl<E, V> fmt::Debug for Setter<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(_) => f.write_str("Setter::Required"),
            Self::Nullable(_) => f.write_str("Setter::Nullable"),
        }
    }
}
