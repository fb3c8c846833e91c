//! Yandex Music API Data Transfer Objects
//!
//! These types match what the API returns. Only the fields the export
//! needs are declared; everything else in the payload is ignored.
//! DO NOT use these types outside the remote module - convert them to
//! model entities in `adapter.rs`.
//!
//! Every response is wrapped in an envelope:
//! ```json
//! {
//!   "invocationInfo": {"hostname": "...", "req-id": "..."},
//!   "result": { ... }
//! }
//! ```
//! Errors replace `result` with `"error": {"name": "...", "message": "..."}`.

use serde::{Deserialize, Serialize};

/// Successful response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub result: T,
}

/// Error response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub name: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Identifier that the API sends either as a number or as a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RemoteId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for RemoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// `GET /account/status`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountStatus {
    pub account: Account,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Account {
    /// Missing when the token is anonymous
    pub uid: Option<u64>,
    pub login: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub id: RemoteId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    pub id: RemoteId,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// Full track details
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub id: RemoteId,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    /// Empty for tracks uploaded by the user
    #[serde(default)]
    pub albums: Vec<Album>,
}

impl Track {
    /// `"<track>:<album>"` for tracks on an album, `"<track>"` otherwise.
    pub fn track_id(&self) -> String {
        match self.albums.first() {
            Some(album) => format!("{}:{}", self.id, album.id),
            None => self.id.to_string(),
        }
    }

    /// Comma-separated artist names
    pub fn artists_name(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Short track reference, as found in likes and playlists
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackShort {
    pub id: RemoteId,
    #[serde(rename = "albumId", default)]
    pub album_id: Option<RemoteId>,
    /// Embedded details, present in playlist listings
    #[serde(default)]
    pub track: Option<Track>,
}

impl TrackShort {
    /// Id accepted by the bulk track endpoint.
    pub fn track_id(&self) -> String {
        match &self.album_id {
            Some(album_id) => format!("{}:{}", self.id, album_id),
            None => self.id.to_string(),
        }
    }
}

/// `GET /users/{uid}/likes/artists?with-timestamps=true` item
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistLike {
    pub artist: Artist,
}

/// `GET /users/{uid}/likes/albums?rich=true` item
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumLike {
    pub album: Album,
}

/// `GET /users/{uid}/likes/tracks`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TracksLikes {
    pub library: Library,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Library {
    #[serde(default)]
    pub tracks: Vec<TrackShort>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Owner {
    pub uid: u64,
}

/// Playlist cover descriptor
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Cover {
    /// `"pic"` for an uploaded picture, `"mosaic"` for generated ones
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Host and path with a `%%` size placeholder, without scheme
    #[serde(default)]
    pub uri: Option<String>,
}

/// `GET /users/{uid}/playlists/list` item, or `GET /users/{uid}/playlists/{kind}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Playlist {
    pub kind: RemoteId,
    pub title: String,
    #[serde(rename = "trackCount", default)]
    pub track_count: usize,
    /// Editable by several users
    #[serde(default)]
    pub collective: bool,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub cover: Option<Cover>,
    /// Only filled by the single-playlist endpoint
    #[serde(default)]
    pub tracks: Vec<TrackShort>,
}

impl Playlist {
    /// URI template of an uploaded cover picture, if any.
    pub fn picture_uri(&self) -> Option<&str> {
        let cover = self.cover.as_ref()?;
        if cover.kind.as_deref() != Some("pic") {
            return None;
        }
        cover.uri.as_deref()
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_liked_tracks() {
        let json = r#"{
            "invocationInfo": {"hostname": "h", "req-id": "r"},
            "result": {
                "library": {
                    "uid": 1,
                    "revision": 7,
                    "tracks": [
                        {"id": "10", "albumId": "20", "timestamp": "2024-01-01T00:00:00+00:00"},
                        {"id": "11", "timestamp": "2024-01-01T00:00:00+00:00"}
                    ]
                }
            }
        }"#;

        let envelope: Envelope<TracksLikes> =
            serde_json::from_str(json).expect("Should parse liked tracks");
        let tracks = envelope.result.library.tracks;

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].track_id(), "10:20");
        assert_eq!(tracks[1].track_id(), "11");
        assert!(tracks[1].album_id.is_none());
    }

    #[test]
    fn test_parse_full_track_with_numeric_ids() {
        let json = r#"{
            "id": 10,
            "title": "Song",
            "artists": [{"id": 1, "name": "Band", "various": false}],
            "albums": [{"id": 20, "title": "Album", "artists": [{"id": 1, "name": "Band"}]}],
            "durationMs": 180000
        }"#;

        let track: Track = serde_json::from_str(json).expect("Should parse track");

        assert_eq!(track.track_id(), "10:20");
        assert_eq!(track.artists_name(), "Band");
        assert_eq!(track.albums[0].artists[0].id, RemoteId::Number(1));
    }

    #[test]
    fn test_parse_uploaded_track() {
        let json = r#"{"id": "abc", "title": "Demo", "artists": [], "albums": []}"#;
        let track: Track = serde_json::from_str(json).expect("Should parse uploaded track");
        assert_eq!(track.track_id(), "abc");
    }

    #[test]
    fn test_parse_playlist_list() {
        let json = r#"{
            "result": [
                {
                    "kind": 1000,
                    "title": "Mix",
                    "trackCount": 2,
                    "collective": true,
                    "owner": {"uid": 5, "login": "me"},
                    "cover": {"type": "pic", "uri": "avatars.yandex.net/get-music-user-playlist/1/x/%%", "custom": true}
                },
                {
                    "kind": 3,
                    "title": "Plain",
                    "cover": {"type": "mosaic", "itemsUri": ["a/%%"]}
                }
            ]
        }"#;

        let envelope: Envelope<Vec<Playlist>> =
            serde_json::from_str(json).expect("Should parse playlists");
        let playlists = envelope.result;

        assert_eq!(playlists.len(), 2);
        assert!(playlists[0].collective);
        assert_eq!(playlists[0].kind.to_string(), "1000");
        assert!(playlists[0].picture_uri().is_some());
        assert!(!playlists[1].collective);
        assert!(playlists[1].picture_uri().is_none());
        assert!(playlists[1].tracks.is_empty());
    }

    #[test]
    fn test_parse_error_envelope() {
        let json = r#"{"error": {"name": "session-expired", "message": "Your OAuth token is expired"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(envelope.error.name, "session-expired");
    }
}
