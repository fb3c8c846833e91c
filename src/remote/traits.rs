//! Trait definitions for the remote music service.
//!
//! The export pipeline only talks to [`MusicApi`]. Production code uses
//! [`super::YandexClient`]; tests substitute the mocks below.

use async_trait::async_trait;

use super::dto;
use crate::error::RemoteError;

/// List operations of the remote music service.
#[async_trait]
pub trait MusicApi: Send + Sync {
    /// Resolve the account behind the token. Must be called first.
    async fn init(&mut self) -> Result<(), RemoteError>;

    /// Liked artists, newest like first.
    async fn liked_artists(&self) -> Result<Vec<dto::Artist>, RemoteError>;

    /// Liked albums, newest like first.
    async fn liked_albums(&self) -> Result<Vec<dto::Album>, RemoteError>;

    /// Short references of liked tracks, newest like first.
    async fn liked_tracks(&self) -> Result<Vec<dto::TrackShort>, RemoteError>;

    /// Full details of many tracks in one request.
    async fn tracks(&self, track_ids: &[String]) -> Result<Vec<dto::Track>, RemoteError>;

    /// The user's playlists, without their tracks.
    async fn playlists(&self) -> Result<Vec<dto::Playlist>, RemoteError>;

    /// Track references of one playlist.
    async fn playlist_tracks(
        &self,
        playlist: &dto::Playlist,
    ) -> Result<Vec<dto::TrackShort>, RemoteError>;

    /// Open a handle for concurrent cover downloads.
    ///
    /// The handle is owned by one download batch and dropped when it ends.
    async fn cover_session(&self) -> Result<Box<dyn CoverSession>, RemoteError>;
}

/// Concurrent-capable cover downloader.
#[async_trait]
pub trait CoverSession: Send + Sync {
    /// Download raw image bytes for a cover URI template.
    async fn download(&self, uri: &str, size: &str) -> Result<Vec<u8>, RemoteError>;
}
