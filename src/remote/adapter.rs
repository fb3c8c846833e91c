//! Adapter layer: convert Yandex Music DTOs to model entities
//!
//! This is the ONLY place where DTO types are converted to entities.
//! Remote numeric ids become decimal strings; a track takes the first
//! album the service lists for it.

use super::dto;
use crate::model::{Album, Artist, Cover, MustOpt, Playlist, Track};

pub fn to_artist(artist: dto::Artist) -> Artist {
    Artist::new(artist.name, artist.id.to_string())
}

pub fn to_album(album: dto::Album) -> Album {
    Album::new(
        album.title,
        album.artists.into_iter().map(to_artist).collect(),
        album.id.to_string(),
    )
}

pub fn to_track(track: dto::Track) -> Track {
    let id = track.track_id();
    let album = MustOpt::from(track.albums.into_iter().next().map(to_album));
    Track::new(
        track.title,
        track.artists.into_iter().map(to_artist).collect(),
        album,
        id,
    )
}

/// Build a playlist from its listing, resolved tracks and recoded cover.
pub fn to_playlist(playlist: dto::Playlist, tracks: Vec<dto::Track>, cover: MustOpt<Cover>) -> Playlist {
    Playlist::new(
        playlist.title,
        tracks.into_iter().map(to_track).collect(),
        cover,
        playlist.kind.to_string(),
    )
}
