//! Test utilities and fixtures for likes-export tests.
//!
//! This module provides DTO factories and small binary fixtures to reduce
//! boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{dto_track, track_ref};
//!
//! #[test]
//! fn test_something() {
//!     let track = dto_track(1, "Song", "Band", Some(10));
//!     let reference = track_ref(1, Some(10));
//!     // ... test logic
//! }
//! ```

use crate::remote::dto;

/// Creates an artist DTO with a numeric id.
pub fn dto_artist(id: u64, name: &str) -> dto::Artist {
    dto::Artist {
        id: dto::RemoteId::Number(id),
        name: name.to_string(),
    }
}

/// Creates a full track DTO with a single artist.
///
/// With `album_id` the track sits on an album titled `"Album <id>"` by the
/// same artist; without it the track looks like a user upload.
pub fn dto_track(id: u64, title: &str, artist: &str, album_id: Option<u64>) -> dto::Track {
    let artist = dto_artist(id * 1000, artist);
    let albums = album_id
        .map(|album_id| dto::Album {
            id: dto::RemoteId::Number(album_id),
            title: format!("Album {album_id}"),
            artists: vec![artist.clone()],
        })
        .into_iter()
        .collect();
    dto::Track {
        id: dto::RemoteId::Number(id),
        title: title.to_string(),
        artists: vec![artist],
        albums,
    }
}

/// Creates a short track reference, as listed in likes.
pub fn track_ref(id: u64, album_id: Option<u64>) -> dto::TrackShort {
    dto::TrackShort {
        id: dto::RemoteId::Number(id),
        album_id: album_id.map(dto::RemoteId::Number),
        track: None,
    }
}

/// Creates a track reference carrying embedded details, as listed in playlists.
pub fn embedded_ref(track: dto::Track) -> dto::TrackShort {
    dto::TrackShort {
        id: track.id.clone(),
        album_id: track.albums.first().map(|a| a.id.clone()),
        track: Some(track),
    }
}

/// Creates a playlist DTO.
///
/// A cover URI makes an uploaded `"pic"` cover; otherwise the cover is a
/// generated mosaic that is never downloaded.
pub fn dto_playlist(
    kind: u64,
    title: &str,
    collective: bool,
    cover_uri: Option<&str>,
    tracks: Vec<dto::TrackShort>,
) -> dto::Playlist {
    let cover = dto::Cover {
        kind: Some(if cover_uri.is_some() { "pic" } else { "mosaic" }.to_string()),
        uri: cover_uri.map(str::to_string),
    };
    dto::Playlist {
        kind: dto::RemoteId::Number(kind),
        title: title.to_string(),
        track_count: tracks.len(),
        collective,
        owner: Some(dto::Owner { uid: 1 }),
        cover: Some(cover),
        tracks,
    }
}

/// Five liked track references with the bulk catalog behind them.
///
/// Tracks 2 and 4 have no album id; the rest sit on albums `100 + id`.
pub fn liked_fixture() -> (Vec<dto::TrackShort>, Vec<dto::Track>) {
    let titles = ["One", "Two", "Three", "Four", "Five"];
    let mut refs = Vec::new();
    let mut catalog = Vec::new();
    for (i, title) in titles.iter().enumerate() {
        let id = i as u64 + 1;
        let album_id = (id % 2 == 1).then_some(100 + id);
        refs.push(track_ref(id, album_id));
        catalog.push(dto_track(id, title, &format!("Artist {id}"), album_id));
    }
    (refs, catalog)
}

/// Encodes a small 4x4 RGBA PNG.
pub fn png_bytes() -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 40, 40, 128]));
    let mut bytes = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut bytes, image::ImageFormat::Png)
        .expect("Failed to encode PNG fixture");
    bytes.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liked_fixture_shape() {
        let (refs, catalog) = liked_fixture();
        assert_eq!(refs.len(), 5);
        assert_eq!(catalog.len(), 5);
        let albumless: Vec<String> = refs
            .iter()
            .filter(|r| r.album_id.is_none())
            .map(|r| r.track_id())
            .collect();
        assert_eq!(albumless, vec!["2", "4"]);
    }

    #[test]
    fn test_png_fixture_is_png() {
        assert_eq!(&png_bytes()[1..4], b"PNG");
    }
}
