use crate::{
    predicate::{Condition, Predicate},
    value::Value,
};
use sha2::{Digest, Sha256};
use std::fmt;

///
/// PredicateFingerprint
///
/// Stable SHA-256 identity of a predicate's column, effective operator and
/// operands. Downstream generators key translations on it.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PredicateFingerprint([u8; 32]);

impl PredicateFingerprint {
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[must_use]
    pub fn as_hex(&self) -> String {
        let mut out = String::with_capacity(64);
        for byte in self.0 {
            use std::fmt::Write as _;
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

impl fmt::Display for PredicateFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_hex())
    }
}

impl<E> Predicate<E> {
    /// Compute the stable fingerprint of this predicate.
    #[must_use]
    pub fn fingerprint(&self) -> PredicateFingerprint {
        let mut hasher = Sha256::new();
        hasher.update(b"predfp:v1");

        let column = self.column();
        let table = column.table();
        write_str(&mut hasher, table.dbms_name());
        write_str(&mut hasher, table.schema_name());
        write_str(&mut hasher, table.table_name());
        write_str(&mut hasher, column.column_name());

        write_tag(&mut hasher, self.predicate_type().tag());
        hash_condition(&mut hasher, self.condition());

        let digest = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        PredicateFingerprint(out)
    }
}

fn hash_condition(hasher: &mut Sha256, condition: &Condition) {
    if let Some(inclusion) = condition.inclusion() {
        write_tag(hasher, inclusion.tag());
    }

    let operands = condition.operands();
    write_len_u32(hasher, operands.len());
    for operand in operands {
        write_value(hasher, operand);
    }
}

///
/// Encode one operand as kind tag plus canonical bytes.
/// Negative zero encodes as positive zero.
///

fn write_value(hasher: &mut Sha256, value: &Value) {
    write_tag(hasher, value.kind().tag());
    match value {
        Value::Bool(v) => write_tag(hasher, u8::from(*v)),
        Value::Byte(v) => hasher.update(v.to_be_bytes()),
        Value::Char(v) => write_u32(hasher, u32::from(*v)),
        Value::Double(v) => {
            let v = if *v == 0.0 { 0.0_f64 } else { *v };
            hasher.update(v.to_bits().to_be_bytes());
        }
        Value::Float(v) => {
            let v = if *v == 0.0 { 0.0_f32 } else { *v };
            write_u32(hasher, v.to_bits());
        }
        Value::Int(v) => hasher.update(v.to_be_bytes()),
        Value::Long(v) => hasher.update(v.to_be_bytes()),
        Value::Short(v) => hasher.update(v.to_be_bytes()),
        Value::Text(v) => write_str(hasher, v),
    }
}

fn write_str(hasher: &mut Sha256, value: &str) {
    write_len_u32(hasher, value.len());
    hasher.update(value.as_bytes());
}

// Encode a platform-sized length as u32 with deterministic saturation.
fn write_len_u32(hasher: &mut Sha256, len: usize) {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    write_u32(hasher, len);
}

fn write_u32(hasher: &mut Sha256, value: u32) {
    hasher.update(value.to_be_bytes());
}

fn write_tag(hasher: &mut Sha256, tag: u8) {
    hasher.update([tag]);
}
