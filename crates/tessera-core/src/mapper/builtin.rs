use crate::{
    error::{ConfigurationError, MappingError},
    mapper::TypeMapper,
};
use std::fmt::Debug;

///
/// IntegerZeroOneToBooleanMapper
///
/// Stores booleans as `0`/`1` integers. Any other stored integer is outside
/// the declared domain.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct IntegerZeroOneToBooleanMapper;

impl IntegerZeroOneToBooleanMapper {
    const LABEL: &'static str = "integer-zero-one-to-boolean";
}

impl TypeMapper<i32, bool> for IntegerZeroOneToBooleanMapper {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn map(&self, value: i32) -> Result<bool, MappingError> {
        match value {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(MappingError::out_of_domain(Self::LABEL, other)),
        }
    }

    fn reverse(&self, value: bool) -> Result<i32, MappingError> {
        Ok(i32::from(value))
    }
}

///
/// LongToIntMapper
///
/// Narrows a stored 64-bit integer into a 32-bit domain value.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct LongToIntMapper;

impl LongToIntMapper {
    const LABEL: &'static str = "long-to-int";
}

impl TypeMapper<i64, i32> for LongToIntMapper {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn map(&self, value: i64) -> Result<i32, MappingError> {
        i32::try_from(value).map_err(|_| MappingError::out_of_domain(Self::LABEL, value))
    }

    fn reverse(&self, value: i32) -> Result<i64, MappingError> {
        Ok(i64::from(value))
    }
}

///
/// LookupMapper
///
/// Finite two-way table, typically stored codes against enum-like domain
/// values. Both columns of the table must be duplicate-free so the mapping
/// is defined in both directions.
///

#[derive(Clone, Debug)]
pub struct LookupMapper<D, J> {
    label: &'static str,
    entries: Vec<(D, J)>,
}

impl<D, J> LookupMapper<D, J>
where
    D: Debug + PartialEq,
    J: Debug + PartialEq,
{
    pub fn new(
        label: &'static str,
        entries: impl IntoIterator<Item = (D, J)>,
    ) -> Result<Self, ConfigurationError> {
        let entries: Vec<(D, J)> = entries.into_iter().collect();

        for (index, (stored, domain)) in entries.iter().enumerate() {
            let earlier = &entries[..index];
            if earlier.iter().any(|(d, _)| d == stored) {
                return Err(ConfigurationError::DuplicateMapping {
                    mapper: label,
                    value: format!("{stored:?}"),
                });
            }
            if earlier.iter().any(|(_, j)| j == domain) {
                return Err(ConfigurationError::DuplicateMapping {
                    mapper: label,
                    value: format!("{domain:?}"),
                });
            }
        }

        Ok(Self { label, entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D, J> TypeMapper<D, J> for LookupMapper<D, J>
where
    D: Clone + Debug + PartialEq + Send + Sync,
    J: Clone + Debug + PartialEq + Send + Sync,
{
    fn label(&self) -> &'static str {
        self.label
    }

    fn map(&self, value: D) -> Result<J, MappingError> {
        self.entries
            .iter()
            .find(|(stored, _)| *stored == value)
            .map(|(_, domain)| domain.clone())
            .ok_or_else(|| MappingError::unmapped(self.label, &value))
    }

    fn reverse(&self, value: J) -> Result<D, MappingError> {
        self.entries
            .iter()
            .find(|(_, domain)| *domain == value)
            .map(|(stored, _)| stored.clone())
            .ok_or_else(|| MappingError::unmapped(self.label, &value))
    }
}
