//! Export pipeline - turns remote listings into exported subjects
//!
//! 1. List liked artists, albums, tracks and playlists
//! 2. Partition track references by album id, warning about album-less ones
//! 3. Resolve track details in one bulk request per partition
//! 4. Download playlist covers concurrently and recode them
//!
//! Liked tracks without an album id are dropped from the export, while
//! playlists keep them: a playlist is exported exactly as the user built it.

use std::collections::HashMap;
use std::path::PathBuf;

use futures::stream::{FuturesUnordered, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};

use super::adapter;
use super::cover::{self, DEFAULT_COVER_SIZE};
use super::dto;
use super::traits::MusicApi;
use crate::error::{Error, Result};
use crate::export::ExportFormat;
use crate::model::{Album, Artist, Cover, MustOpt, Playlist, Track};
use crate::subject::{SortBy, SubjectKind, Subjects, resolve_selection};

/// Configuration for the export pipeline
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Cover size requested from the image host, e.g. "400x400"
    pub cover_size: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            cover_size: DEFAULT_COVER_SIZE.to_string(),
        }
    }
}

/// What track resolution does with references lacking an album id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Albumless {
    /// Warn and leave them out (liked tracks)
    Drop,
    /// Warn and keep them (playlists)
    Keep,
}

/// Fetches subjects from a [`MusicApi`] and builds model entities.
pub struct ExportPipeline<A: MusicApi> {
    api: A,
    config: ExportConfig,
}

impl<A: MusicApi> ExportPipeline<A> {
    pub fn new(api: A, config: ExportConfig) -> Self {
        Self { api, config }
    }

    /// Initialize the underlying client.
    pub async fn init(&mut self) -> Result<()> {
        tracing::debug!("Initializing music service client...");
        self.api
            .init()
            .await
            .map_err(|e| Error::remote("initializing client", 0, e))?;
        tracing::debug!("Initializing music service client done");
        Ok(())
    }

    /// Fetch every requested kind into a new collection.
    pub async fn export(&self, kinds: &[SubjectKind]) -> Result<Subjects> {
        let mut subjects = Subjects::new();
        for kind in resolve_selection(kinds)? {
            match kind {
                SubjectKind::Artists => subjects.set_artists(self.artists().await?),
                SubjectKind::Albums => subjects.set_albums(self.albums().await?),
                SubjectKind::Tracks => subjects.set_tracks(self.tracks().await?),
                SubjectKind::Playlists => subjects.set_playlists(self.playlists().await?),
                // Expanded by resolve_selection
                SubjectKind::All => {}
            }
        }
        Ok(subjects)
    }

    /// Liked artists in fetch order.
    pub async fn artists(&self) -> Result<Vec<Artist>> {
        tracing::info!("Listing liked artists...");
        let likes = self
            .api
            .liked_artists()
            .await
            .map_err(|e| Error::remote("listing liked artists", 0, e))?;
        log_got(SubjectKind::Artists, likes.len());

        let artists: Vec<Artist> = likes.into_iter().map(adapter::to_artist).collect();
        tracing::info!("Fetched {}", SubjectKind::Artists.count(artists.len()));
        Ok(artists)
    }

    /// Liked albums in fetch order.
    pub async fn albums(&self) -> Result<Vec<Album>> {
        tracing::info!("Listing liked albums...");
        let likes = self
            .api
            .liked_albums()
            .await
            .map_err(|e| Error::remote("listing liked albums", 0, e))?;
        log_got(SubjectKind::Albums, likes.len());

        let albums: Vec<Album> = likes.into_iter().map(adapter::to_album).collect();
        tracing::info!("Fetched {}", SubjectKind::Albums.count(albums.len()));
        Ok(albums)
    }

    /// Liked tracks in fetch order. Tracks without an album are left out.
    pub async fn tracks(&self) -> Result<Vec<Track>> {
        tracing::info!("Listing liked tracks...");
        let refs = self
            .api
            .liked_tracks()
            .await
            .map_err(|e| Error::remote("listing liked tracks", 0, e))?;
        log_got(SubjectKind::Tracks, refs.len());

        let tracks = self.resolve_tracks(&refs, Albumless::Drop).await?;
        Ok(tracks.into_iter().map(adapter::to_track).collect())
    }

    /// The user's playlists with tracks and covers.
    pub async fn playlists(&self) -> Result<Vec<Playlist>> {
        tracing::info!("Listing playlists...");
        let listings = self
            .api
            .playlists()
            .await
            .map_err(|e| Error::remote("listing playlists", 0, e))?;
        tracing::info!("Got {}", SubjectKind::Playlists.count(listings.len()));

        let mut covers = self.download_covers(&listings).await?;

        let mut playlists = Vec::with_capacity(listings.len());
        for listing in listings {
            tracing::debug!(
                "Fetching {} track meta of playlist {:?} with id {}",
                listing.track_count,
                listing.title,
                listing.kind
            );
            let refs = self.api.playlist_tracks(&listing).await.map_err(|e| {
                Error::remote(
                    format!("fetching tracks of playlist {}", listing.kind),
                    listing.track_count,
                    e,
                )
            })?;
            let tracks = self.playlist_track_details(&listing, &refs).await?;
            let cover = MustOpt::from(covers.remove(&listing.kind.to_string()));
            playlists.push(adapter::to_playlist(listing, tracks, cover));
        }

        tracing::info!("Fetched {}", SubjectKind::Playlists.count(playlists.len()));
        Ok(playlists)
    }

    /// Resolve full details for track references, in reference order.
    ///
    /// Album-less references are always fetched so they can be reported;
    /// `albumless` decides whether they make it into the result.
    pub async fn resolve_tracks(
        &self,
        refs: &[dto::TrackShort],
        albumless: Albumless,
    ) -> Result<Vec<dto::Track>> {
        let (with_album, without_album): (Vec<&dto::TrackShort>, Vec<&dto::TrackShort>) =
            refs.iter().partition(|r| r.album_id.is_some());

        let albumless_tracks = self.warn_albumless(&without_album).await?;

        let ids: Vec<String> = with_album.iter().map(|r| r.track_id()).collect();
        tracing::debug!("Fetching {}", SubjectKind::Tracks.count(ids.len()));
        let mut resolved = self.bulk(&ids, "resolving tracks").await?;
        tracing::info!("Fetched {}", SubjectKind::Tracks.count(resolved.len()));

        if albumless == Albumless::Keep {
            resolved.extend(albumless_tracks);
        }

        let expected = match albumless {
            Albumless::Keep => refs.len(),
            Albumless::Drop => with_album.len(),
        };
        let ordered = in_ref_order(refs, resolved);
        if ordered.len() < expected {
            tracing::warn!(
                "{} could not be resolved",
                SubjectKind::Tracks.count(expected - ordered.len())
            );
        }
        Ok(ordered)
    }

    /// Fetch album-less tracks for display and warn about them.
    async fn warn_albumless(&self, refs: &[&dto::TrackShort]) -> Result<Vec<dto::Track>> {
        if refs.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = refs.iter().map(|r| r.track_id()).collect();
        let tracks = self.bulk(&ids, "fetching tracks without album").await?;

        let n = refs.len();
        let listing = tracks
            .iter()
            .map(|t| format!("[{}] {} - {}", t.track_id(), t.artists_name(), t.title))
            .collect::<Vec<_>>()
            .join("; ");
        let (have, it_was) = if n == 1 {
            ("has", "it was")
        } else {
            ("have", "they were")
        };
        tracing::warn!(
            "{} {} no album ID: {}. Probably, {} uploaded by user",
            SubjectKind::Tracks.count(n),
            have,
            listing,
            it_was
        );

        Ok(tracks)
    }

    /// One bulk request; skipped when there is nothing to ask for.
    async fn bulk(&self, ids: &[String], operation: &str) -> Result<Vec<dto::Track>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.api
            .tracks(ids)
            .await
            .map_err(|e| Error::remote(operation, ids.len(), e))
    }

    /// Collaborative playlists are re-resolved; others use embedded details.
    async fn playlist_track_details(
        &self,
        listing: &dto::Playlist,
        refs: &[dto::TrackShort],
    ) -> Result<Vec<dto::Track>> {
        if listing.collective {
            return self.resolve_tracks(refs, Albumless::Keep).await;
        }

        let (embedded, missing): (Vec<&dto::TrackShort>, Vec<&dto::TrackShort>) =
            refs.iter().partition(|r| r.track.is_some());

        let mut tracks: Vec<dto::Track> = embedded
            .into_iter()
            .filter_map(|r| r.track.clone())
            .collect();
        if !missing.is_empty() {
            tracing::debug!(
                "Playlist {} lists {} without details",
                listing.kind,
                SubjectKind::Tracks.count(missing.len())
            );
            let missing: Vec<dto::TrackShort> = missing.into_iter().cloned().collect();
            tracks.extend(self.resolve_tracks(&missing, Albumless::Keep).await?);
        }
        Ok(in_ref_order(refs, tracks))
    }

    /// Download and recode covers of playlists that have a picture.
    ///
    /// Downloads run concurrently on a cover session that lives exactly as
    /// long as this batch. Results are handled in completion order; the
    /// first failure aborts the batch.
    async fn download_covers(&self, listings: &[dto::Playlist]) -> Result<HashMap<String, Cover>> {
        let pending: Vec<(String, &str)> = listings
            .iter()
            .filter_map(|p| p.picture_uri().map(|uri| (p.kind.to_string(), uri)))
            .collect();
        if pending.is_empty() {
            return Ok(HashMap::new());
        }

        let total = pending.len();
        tracing::info!(
            "{} {} cover picture. Downloading {}",
            SubjectKind::Playlists.count(total),
            if total == 1 { "has" } else { "have" },
            if total == 1 { "it" } else { "them" }
        );

        let session = self
            .api
            .cover_session()
            .await
            .map_err(|e| Error::remote("opening cover session", total, e))?;
        let size = self.config.cover_size.as_str();
        let progress = cover_progress(total);

        let mut downloads: FuturesUnordered<_> = pending
            .iter()
            .map(|(id, uri)| {
                let session = &session;
                async move { session.download(uri, size).await.map(|bytes| (id, bytes)) }
            })
            .collect();

        let mut covers = HashMap::with_capacity(total);
        while let Some(result) = downloads.next().await {
            let (id, bytes) =
                result.map_err(|e| Error::remote("downloading playlist covers", total, e))?;
            let cover = cover::recode(&bytes)
                .map_err(|e| Error::remote(format!("recoding cover of playlist {id}"), total, e))?;
            covers.insert(id.clone(), cover);
            progress.inc(1);
        }
        progress.finish_and_clear();

        tracing::debug!("Downloaded {} playlist covers", covers.len());
        Ok(covers)
    }
}

const PROGRESS_TEMPLATE: &str = "{msg} [{bar:40}] {pos}/{len}";

fn cover_progress(total: usize) -> ProgressBar {
    let progress = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
        progress.set_style(style.progress_chars("=> "));
    }
    progress.set_message("Downloading playlist covers");
    progress
}

fn log_got(kind: SubjectKind, n: usize) {
    tracing::info!("Got {} liked {}", n, kind.noun(n));
}

/// Order tracks like their references. References without a track are skipped.
fn in_ref_order(refs: &[dto::TrackShort], tracks: Vec<dto::Track>) -> Vec<dto::Track> {
    let by_id: HashMap<String, dto::Track> = tracks
        .into_iter()
        .map(|t| (t.id.to_string(), t))
        .collect();
    refs.iter()
        .filter_map(|r| by_id.get(&r.id.to_string()).cloned())
        .collect()
}

/// A user's export request, validated before any remote call.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub output: PathBuf,
    pub subjects: Vec<SubjectKind>,
    pub sort: SortBy,
}

impl ExportRequest {
    /// Check the output format and the subject selection.
    pub fn validate(&self) -> Result<(ExportFormat, Vec<SubjectKind>)> {
        let format = ExportFormat::from_path(&self.output)?;
        let kinds = resolve_selection(&self.subjects)?;
        Ok((format, kinds))
    }
}

/// Validate, fetch and write an export in one go.
///
/// Configuration errors are raised before the client is initialized.
pub async fn export_to_file<A: MusicApi>(
    api: A,
    config: ExportConfig,
    request: &ExportRequest,
) -> Result<Subjects> {
    let (format, kinds) = request.validate()?;

    let mut pipeline = ExportPipeline::new(api, config);
    pipeline.init().await?;
    let subjects = pipeline.export(&kinds).await?;

    tracing::info!("Writing subjects to {:?}", request.output);
    subjects.dump(&request.output, format, request.sort)?;
    Ok(subjects)
}
