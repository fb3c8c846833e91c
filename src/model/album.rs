//! Album entity.

use std::cmp::Ordering;

use serde_json::Value;

use super::artist::Artist;
use super::order::{NaturalOrder, cmp_children_then_title};
use super::record::{Mapping, Record, identity_by_id, list, required_list, required_str};
use crate::error::Result;

/// An album, with its credited artists in service order.
#[derive(Debug, Clone)]
pub struct Album {
    pub title: String,
    pub artists: Vec<Artist>,
    pub id: String,
}

impl Album {
    pub fn new(title: impl Into<String>, artists: Vec<Artist>, id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artists,
            id: id.into(),
        }
    }
}

identity_by_id!(Album);

impl Record for Album {
    const KIND: &'static str = "album";

    fn id(&self) -> &str {
        &self.id
    }

    fn serialize(&self) -> Mapping {
        let mut record = Mapping::new();
        record.insert("title".into(), Value::String(self.title.clone()));
        record.insert("artists".into(), list(&self.artists));
        record.insert("id".into(), Value::String(self.id.clone()));
        record
    }

    fn deserialize(record: &Mapping) -> Result<Self> {
        Ok(Self {
            title: required_str(record, "title", Self::KIND)?,
            artists: required_list(record, "artists", Self::KIND)?,
            id: required_str(record, "id", Self::KIND)?,
        })
    }
}

impl NaturalOrder for Album {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        cmp_children_then_title(&self.artists, &self.title, &other.artists, &other.title)
    }
}
