//! Mapping-shaped encoding shared by all entities.
//!
//! Entities are encoded as string-keyed mappings ([`Mapping`]) rather than
//! deriving serde directly, so optional fields can be omitted and decoding
//! can report exactly which key of which entity kind is malformed.

use serde_json::Value;

use crate::error::{Error, Result};

/// String-keyed mapping. Keys iterate in sorted order.
pub type Mapping = serde_json::Map<String, Value>;

/// An entity that round-trips through a [`Mapping`].
///
/// `deserialize(&x.serialize())` must reproduce `x`.
pub trait Record: Sized {
    /// Singular entity kind, used in error messages.
    const KIND: &'static str;

    /// Stable identity of the entity.
    fn id(&self) -> &str;

    /// Encode into a mapping. Absent optional fields are omitted.
    fn serialize(&self) -> Mapping;

    /// Decode from a mapping produced by [`Record::serialize`].
    fn deserialize(record: &Mapping) -> Result<Self>;

    /// Decode from an arbitrary value that should be a mapping.
    fn deserialize_value(value: &Value) -> Result<Self> {
        let record = value
            .as_object()
            .ok_or_else(|| Error::malformed(Self::KIND, "expected a mapping"))?;
        Self::deserialize(record)
    }
}

/// Read a required string field.
pub(crate) fn required_str(record: &Mapping, key: &str, kind: &'static str) -> Result<String> {
    match record.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(Error::malformed(kind, format!("key `{key}` must be a string"))),
        None => Err(Error::malformed(kind, format!("missing key `{key}`"))),
    }
}

/// Decode a required list of nested records.
pub(crate) fn required_list<R: Record>(
    record: &Mapping,
    key: &str,
    kind: &'static str,
) -> Result<Vec<R>> {
    match record.get(key) {
        Some(Value::Array(items)) => items.iter().map(R::deserialize_value).collect(),
        Some(_) => Err(Error::malformed(kind, format!("key `{key}` must be a list"))),
        None => Err(Error::malformed(kind, format!("missing key `{key}`"))),
    }
}

/// Look up an optional field; `null` counts as absent.
pub(crate) fn optional<'a>(record: &'a Mapping, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|v| !v.is_null())
}

/// Encode a slice of records as a list value.
pub(crate) fn list<R: Record>(items: &[R]) -> Value {
    Value::Array(items.iter().map(|i| Value::Object(i.serialize())).collect())
}

/// Identity-based equality and hashing: only `id` takes part.
macro_rules! identity_by_id {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.id.hash(state);
            }
        }
    };
}

pub(crate) use identity_by_id;
