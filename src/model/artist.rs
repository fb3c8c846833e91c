//! Artist entity.

use std::cmp::Ordering;

use serde_json::Value;

use super::order::NaturalOrder;
use super::record::{Mapping, Record, identity_by_id, required_str};
use crate::error::Result;

/// An artist liked by the user, or credited on an album or track.
#[derive(Debug, Clone)]
pub struct Artist {
    pub name: String,
    pub id: String,
}

impl Artist {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

identity_by_id!(Artist);

impl Record for Artist {
    const KIND: &'static str = "artist";

    fn id(&self) -> &str {
        &self.id
    }

    fn serialize(&self) -> Mapping {
        let mut record = Mapping::new();
        record.insert("name".into(), Value::String(self.name.clone()));
        record.insert("id".into(), Value::String(self.id.clone()));
        record
    }

    fn deserialize(record: &Mapping) -> Result<Self> {
        Ok(Self {
            name: required_str(record, "name", Self::KIND)?,
            id: required_str(record, "id", Self::KIND)?,
        })
    }
}

impl NaturalOrder for Artist {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
