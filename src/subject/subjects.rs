//! Container for the subjects being exported.

use std::path::Path;

use serde_json::Value;

use super::{SortBy, SubjectKind};
use crate::error::{Error, Result, ResultExt};
use crate::export::{ExportFormat, writer};
use crate::model::{Album, Artist, Mapping, NaturalOrder, Playlist, Record, Track};

/// Liked artists, albums and tracks plus playlists, in fetch order.
///
/// Each kind is replaced wholesale; populate fully, then serialize once.
#[derive(Debug, Default)]
pub struct Subjects {
    artists: Vec<Artist>,
    albums: Vec<Album>,
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
}

type Encoder = fn(&Subjects, SortBy) -> Option<Vec<Value>>;
type Decoder = fn(&mut Subjects, &Value) -> Result<()>;

/// Per-kind serialization dispatch, in export order.
const SECTIONS: [(SubjectKind, Encoder, Decoder); 4] = [
    (SubjectKind::Artists, encode_artists, decode_artists),
    (SubjectKind::Albums, encode_albums, decode_albums),
    (SubjectKind::Tracks, encode_tracks, decode_tracks),
    (SubjectKind::Playlists, encode_playlists, decode_playlists),
];

impl Subjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn set_artists(&mut self, artists: Vec<Artist>) {
        self.artists = artists;
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn set_albums(&mut self, albums: Vec<Album>) {
        self.albums = albums;
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn set_playlists(&mut self, playlists: Vec<Playlist>) {
        self.playlists = playlists;
    }

    /// Number of entities of each kind, in export order.
    pub fn counts(&self) -> [(SubjectKind, usize); 4] {
        [
            (SubjectKind::Artists, self.artists.len()),
            (SubjectKind::Albums, self.albums.len()),
            (SubjectKind::Tracks, self.tracks.len()),
            (SubjectKind::Playlists, self.playlists.len()),
        ]
    }

    /// Total number of entities across all kinds.
    pub fn len(&self) -> usize {
        self.counts().iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize every non-empty kind under its plural key.
    ///
    /// Empty kinds are omitted, so an empty collection yields an empty mapping.
    pub fn serialize_all(&self, sort: SortBy) -> Mapping {
        let mut subjects = Mapping::new();
        for (kind, encode, _) in SECTIONS {
            match encode(self, sort) {
                Some(items) => {
                    tracing::debug!("Serializing {}", kind.count(items.len()));
                    subjects.insert(kind.label().to_string(), Value::Array(items));
                }
                None => tracing::debug!("No {} to serialize", kind),
            }
        }
        subjects
    }

    /// Serialize and write to `path`, replacing its content.
    pub fn dump(&self, path: &Path, format: ExportFormat, sort: SortBy) -> Result<()> {
        tracing::debug!(
            "Serializing subjects to {:?} with {} backend sorted by {}",
            path,
            format,
            sort
        );
        writer::write(path, &self.serialize_all(sort), format)
    }

    /// Read a file previously written by [`Subjects::dump`].
    pub fn load(path: &Path) -> Result<Self> {
        let format = ExportFormat::from_path(path)?;
        let bytes = std::fs::read(path).with_context(format!("Failed to read {}", path.display()))?;
        let value = writer::decode(&bytes, format)?;
        Self::from_value(&value)
    }

    /// Rebuild a collection from a decoded export mapping.
    pub fn from_value(value: &Value) -> Result<Self> {
        let record = value
            .as_object()
            .ok_or_else(|| Error::malformed("subjects", "expected a top-level mapping"))?;

        let mut subjects = Self::new();
        for (kind, _, decode) in SECTIONS {
            if let Some(items) = record.get(kind.label()) {
                decode(&mut subjects, items)?;
            }
        }
        Ok(subjects)
    }
}

fn encode_artists(s: &Subjects, sort: SortBy) -> Option<Vec<Value>> {
    encode_section(&s.artists, sort)
}

fn encode_albums(s: &Subjects, sort: SortBy) -> Option<Vec<Value>> {
    encode_section(&s.albums, sort)
}

fn encode_tracks(s: &Subjects, sort: SortBy) -> Option<Vec<Value>> {
    encode_section(&s.tracks, sort)
}

fn encode_playlists(s: &Subjects, sort: SortBy) -> Option<Vec<Value>> {
    encode_section(&s.playlists, sort)
}

fn decode_artists(s: &mut Subjects, value: &Value) -> Result<()> {
    s.artists = decode_section(value)?;
    Ok(())
}

fn decode_albums(s: &mut Subjects, value: &Value) -> Result<()> {
    s.albums = decode_section(value)?;
    Ok(())
}

fn decode_tracks(s: &mut Subjects, value: &Value) -> Result<()> {
    s.tracks = decode_section(value)?;
    Ok(())
}

fn decode_playlists(s: &mut Subjects, value: &Value) -> Result<()> {
    s.playlists = decode_section(value)?;
    Ok(())
}

fn encode_section<R: Record + NaturalOrder>(items: &[R], sort: SortBy) -> Option<Vec<Value>> {
    if items.is_empty() {
        return None;
    }
    Some(
        sort.apply(items)
            .into_iter()
            .map(|item| Value::Object(item.serialize()))
            .collect(),
    )
}

fn decode_section<R: Record>(value: &Value) -> Result<Vec<R>> {
    value
        .as_array()
        .ok_or_else(|| Error::malformed(R::KIND, "expected a list of records"))?
        .iter()
        .map(R::deserialize_value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cover, MustOpt};

    fn artist(name: &str, id: &str) -> Artist {
        Artist::new(name, id)
    }

    fn sample() -> Subjects {
        let mut subjects = Subjects::new();
        subjects.set_artists(vec![artist("b", "1"), artist("a", "2")]);
        subjects.set_tracks(vec![
            Track::new("x", vec![artist("b", "1")], MustOpt::empty(), "A"),
            Track::new(
                "y",
                vec![artist("a", "2")],
                MustOpt::new(Album::new("al", vec![artist("a", "2")], "9")),
                "B",
            ),
        ]);
        subjects.set_playlists(vec![Playlist::new(
            "p",
            vec![],
            MustOpt::new(Cover::parse("aGk=").unwrap()),
            "1000",
        )]);
        subjects
    }

    #[test]
    fn test_empty_collection_serializes_to_empty_mapping() {
        let subjects = Subjects::new();
        assert!(subjects.is_empty());
        assert!(subjects.serialize_all(SortBy::default()).is_empty());
    }

    #[test]
    fn test_empty_kinds_are_omitted() {
        let encoded = sample().serialize_all(SortBy::Oldest);
        let keys: Vec<&str> = encoded.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["artists", "playlists", "tracks"]);
    }

    #[test]
    fn test_sort_applies_per_kind() {
        let encoded = sample().serialize_all(SortBy::LexicalAsc);
        assert_eq!(encoded["artists"][0]["name"], "a");
        assert_eq!(encoded["tracks"][0]["id"], "B");

        let encoded = sample().serialize_all(SortBy::Latest);
        assert_eq!(encoded["artists"][0]["id"], "2");
        assert_eq!(encoded["tracks"][0]["id"], "B");
    }

    #[test]
    fn test_counts() {
        let subjects = sample();
        assert_eq!(subjects.len(), 5);
        assert_eq!(subjects.counts()[1], (SubjectKind::Albums, 0));
    }

    #[test]
    fn test_dump_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        sample().dump(&path, ExportFormat::Json, SortBy::Oldest).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert!(parsed.get("albums").is_none());

        let loaded = Subjects::load(&path).unwrap();
        assert_eq!(loaded.artists(), sample().artists());
        assert_eq!(loaded.tracks(), sample().tracks());
        assert!(loaded.tracks()[1].album.valid());
        assert_eq!(
            loaded.playlists()[0].cover.must().unwrap().as_base64(),
            "aGk="
        );
    }

    #[test]
    fn test_dump_and_load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.yaml");

        sample().dump(&path, ExportFormat::Yaml, SortBy::Oldest).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("artists:"));
        assert!(text.find("\nplaylists:").unwrap() < text.find("\ntracks:").unwrap());

        let loaded = Subjects::load(&path).unwrap();
        assert_eq!(loaded.len(), 5);
    }

    #[test]
    fn test_load_rejects_malformed_section() {
        let value = serde_json::json!({"tracks": [{"title": "t", "id": "1"}]});
        let err = Subjects::from_value(&value).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { kind: "track", .. }));
    }

    #[test]
    fn test_load_rejects_unknown_suffix() {
        let err = Subjects::load(Path::new("export.txt")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
