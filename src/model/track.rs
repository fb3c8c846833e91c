//! Track entity.

use std::cmp::Ordering;

use serde_json::Value;

use super::album::Album;
use super::artist::Artist;
use super::opt::MustOpt;
use super::order::{NaturalOrder, cmp_children_then_title, sorted_refs};
use super::record::{
    Mapping, Record, identity_by_id, list, optional, required_list, required_str,
};
use crate::error::Result;

/// A track. User-uploaded tracks may have no album.
#[derive(Debug, Clone)]
pub struct Track {
    pub title: String,
    pub artists: Vec<Artist>,
    pub album: MustOpt<Album>,
    pub id: String,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artists: Vec<Artist>,
        album: MustOpt<Album>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artists,
            album,
            id: id.into(),
        }
    }
}

identity_by_id!(Track);

impl Record for Track {
    const KIND: &'static str = "track";

    fn id(&self) -> &str {
        &self.id
    }

    fn serialize(&self) -> Mapping {
        let mut record = Mapping::new();
        record.insert("title".into(), Value::String(self.title.clone()));
        record.insert("artists".into(), list(&self.artists));
        if let Some(album) = self.album.as_option() {
            record.insert("album".into(), Value::Object(album.serialize()));
        }
        record.insert("id".into(), Value::String(self.id.clone()));
        record
    }

    fn deserialize(record: &Mapping) -> Result<Self> {
        let album = match optional(record, "album") {
            Some(value) => MustOpt::new(Album::deserialize_value(value)?),
            None => MustOpt::empty(),
        };
        Ok(Self {
            title: required_str(record, "title", Self::KIND)?,
            artists: required_list(record, "artists", Self::KIND)?,
            album,
            id: required_str(record, "id", Self::KIND)?,
        })
    }
}

impl NaturalOrder for Track {
    /// Artists are compared in sorted order, so credit order does not matter.
    fn natural_cmp(&self, other: &Self) -> Ordering {
        let ours = sorted_refs(&self.artists);
        let theirs = sorted_refs(&other.artists);
        cmp_children_then_title(
            ours.iter().copied(),
            &self.title,
            theirs.iter().copied(),
            &other.title,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn album() -> Album {
        Album::new(
            "e",
            vec![Artist::new("f", "3"), Artist::new("g", "4")],
            "5",
        )
    }

    fn track(album: MustOpt<Album>) -> Track {
        Track::new(
            "b",
            vec![Artist::new("c", "1"), Artist::new("d", "2")],
            album,
            "6",
        )
    }

    #[test]
    fn test_serialize_track_with_album() {
        let expected = json!({
            "title": "b",
            "artists": [{"name": "c", "id": "1"}, {"name": "d", "id": "2"}],
            "album": {
                "title": "e",
                "artists": [{"name": "f", "id": "3"}, {"name": "g", "id": "4"}],
                "id": "5",
            },
            "id": "6",
        });
        assert_eq!(Value::Object(track(MustOpt::new(album())).serialize()), expected);
    }

    #[test]
    fn test_serialize_track_without_album_omits_key() {
        let record = track(MustOpt::empty()).serialize();
        assert!(!record.contains_key("album"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_deserialize_track_without_album() {
        let value = json!({"title": "Song", "artists": [{"name": "Band", "id": "1"}], "id": "42"});
        let decoded = Track::deserialize_value(&value).unwrap();
        assert_eq!(decoded.id, "42");
        assert!(!decoded.album.valid());
    }

    #[test]
    fn test_deserialize_track_with_album() {
        let encoded = track(MustOpt::new(album())).serialize();
        let decoded = Track::deserialize(&encoded).unwrap();
        assert_eq!(decoded.album.must().unwrap().title, "e");
    }

    #[test]
    fn test_deserialize_track_malformed_album() {
        let value = json!({
            "title": "b",
            "artists": [],
            "album": {"title": "e", "id": "5"},
            "id": "6",
        });
        let err = Track::deserialize_value(&value).unwrap_err();
        assert!(err.to_string().contains("album"));
    }

    #[test]
    fn test_artist_order_does_not_matter() {
        let x = Track::new(
            "t",
            vec![Artist::new("b", "1"), Artist::new("a", "2")],
            MustOpt::empty(),
            "10",
        );
        let y = Track::new(
            "t",
            vec![Artist::new("a", "2"), Artist::new("b", "1")],
            MustOpt::empty(),
            "11",
        );
        assert_eq!(x.natural_cmp(&y), Ordering::Equal);
    }

    #[test]
    fn test_artists_dominate_title() {
        let a = Track::new("x", vec![Artist::new("b", "1")], MustOpt::empty(), "1");
        let b = Track::new("y", vec![Artist::new("a", "2")], MustOpt::empty(), "2");
        assert!(b.natural_lt(&a));
        assert!(a.natural_gt(&b));
    }
}
