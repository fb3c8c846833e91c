//! Playlist entity and its cover image.

use std::cmp::Ordering;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::Value;

use super::opt::MustOpt;
use super::order::{NaturalOrder, cmp_children_then_title};
use super::record::{
    Mapping, Record, identity_by_id, list, optional, required_list, required_str,
};
use super::track::Track;
use crate::error::{Error, Result};

/// Base64 text of a re-encoded cover image.
///
/// Built from image bytes with [`Cover::encode`], or read back from a
/// previously exported file with [`Cover::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover(String);

impl Cover {
    /// Encode image bytes as base64.
    pub fn encode(image: &[u8]) -> Self {
        Self(STANDARD.encode(image))
    }

    /// Accept text that is already base64, rejecting anything else.
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let cover = Self(text.into());
        cover.decode()?;
        Ok(cover)
    }

    pub fn as_base64(&self) -> &str {
        &self.0
    }

    /// Decode back to image bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.0)
            .map_err(|e| Error::malformed(Playlist::KIND, format!("invalid cover: {e}")))
    }
}

/// A user playlist with its tracks in playlist order.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub title: String,
    pub tracks: Vec<Track>,
    pub cover: MustOpt<Cover>,
    pub id: String,
}

impl Playlist {
    pub fn new(
        title: impl Into<String>,
        tracks: Vec<Track>,
        cover: MustOpt<Cover>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            tracks,
            cover,
            id: id.into(),
        }
    }
}

identity_by_id!(Playlist);

impl Record for Playlist {
    const KIND: &'static str = "playlist";

    fn id(&self) -> &str {
        &self.id
    }

    fn serialize(&self) -> Mapping {
        let mut record = Mapping::new();
        record.insert("title".into(), Value::String(self.title.clone()));
        record.insert("tracks".into(), list(&self.tracks));
        if let Some(cover) = self.cover.as_option() {
            record.insert("cover".into(), Value::String(cover.as_base64().to_string()));
        }
        record.insert("id".into(), Value::String(self.id.clone()));
        record
    }

    fn deserialize(record: &Mapping) -> Result<Self> {
        let cover = match optional(record, "cover") {
            Some(Value::String(text)) => {
                let cover = Cover::parse(text.clone())
                    .map_err(|_| Error::malformed(Self::KIND, "key `cover` must be base64"))?;
                MustOpt::new(cover)
            }
            Some(_) => {
                return Err(Error::malformed(Self::KIND, "key `cover` must be a string"));
            }
            None => MustOpt::empty(),
        };
        Ok(Self {
            title: required_str(record, "title", Self::KIND)?,
            tracks: required_list(record, "tracks", Self::KIND)?,
            cover,
            id: required_str(record, "id", Self::KIND)?,
        })
    }
}

impl NaturalOrder for Playlist {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        cmp_children_then_title(&self.tracks, &self.title, &other.tracks, &other.title)
    }
}
