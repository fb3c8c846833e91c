//! Yandex Music HTTP client
//!
//! Talks to the mobile API at https://api.music.yandex.net using an OAuth
//! token. Every call is a single request; retries are left to the user.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use super::cover::cover_url;
use super::dto;
use super::traits::{CoverSession, MusicApi};
use crate::error::RemoteError;

const BASE_URL: &str = "https://api.music.yandex.net";

const USER_AGENT: &str = concat!("likes-export/", env!("CARGO_PKG_VERSION"));

/// Yandex Music API client
pub struct YandexClient {
    http_client: reqwest::Client,
    base_url: String,
    uid: Option<u64>,
}

impl YandexClient {
    /// Create a client authorized with an OAuth token.
    pub fn new(token: &str) -> Result<Self, RemoteError> {
        Self::with_base_url(token, BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(token: &str, base_url: impl Into<String>) -> Result<Self, RemoteError> {
        let mut auth = HeaderValue::from_str(&format!("OAuth {token}"))
            .map_err(|_| RemoteError::Api("token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
            uid: None,
        })
    }

    fn uid(&self) -> Result<u64, RemoteError> {
        self.uid.ok_or(RemoteError::NotInitialized)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        parse_response(response).await
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, RemoteError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .form(form)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        parse_response(response).await
    }
}

/// Check the status and unwrap the `result` envelope.
async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RemoteError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(RemoteError::Unauthorized);
    }

    if !status.is_success() {
        // Try to parse error response
        if let Ok(envelope) = response.json::<dto::ErrorEnvelope>().await {
            let error = envelope.error;
            return Err(RemoteError::Api(match error.message {
                Some(message) => format!("{}: {}", error.name, message),
                None => error.name,
            }));
        }
        return Err(RemoteError::Network(format!(
            "HTTP {}: {}",
            status,
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    response
        .json::<dto::Envelope<T>>()
        .await
        .map(|envelope| envelope.result)
        .map_err(|e| RemoteError::Parse(e.to_string()))
}

#[async_trait]
impl MusicApi for YandexClient {
    async fn init(&mut self) -> Result<(), RemoteError> {
        let status: dto::AccountStatus = self.get("/account/status").await?;
        let uid = status.account.uid.ok_or(RemoteError::Unauthorized)?;
        tracing::debug!(
            "Authorized as {} ({})",
            status.account.login.as_deref().unwrap_or("unknown"),
            uid
        );
        self.uid = Some(uid);
        Ok(())
    }

    async fn liked_artists(&self) -> Result<Vec<dto::Artist>, RemoteError> {
        let path = format!("/users/{}/likes/artists?with-timestamps=true", self.uid()?);
        let likes: Vec<dto::ArtistLike> = self.get(&path).await?;
        Ok(likes.into_iter().map(|like| like.artist).collect())
    }

    async fn liked_albums(&self) -> Result<Vec<dto::Album>, RemoteError> {
        let path = format!("/users/{}/likes/albums?rich=true", self.uid()?);
        let likes: Vec<dto::AlbumLike> = self.get(&path).await?;
        Ok(likes.into_iter().map(|like| like.album).collect())
    }

    async fn liked_tracks(&self) -> Result<Vec<dto::TrackShort>, RemoteError> {
        let path = format!("/users/{}/likes/tracks", self.uid()?);
        let likes: dto::TracksLikes = self.get(&path).await?;
        Ok(likes.library.tracks)
    }

    async fn tracks(&self, track_ids: &[String]) -> Result<Vec<dto::Track>, RemoteError> {
        let ids = track_ids.join(",");
        self.post_form("/tracks", &[("track-ids", ids.as_str()), ("with-positions", "false")])
            .await
    }

    async fn playlists(&self) -> Result<Vec<dto::Playlist>, RemoteError> {
        let path = format!("/users/{}/playlists/list", self.uid()?);
        self.get(&path).await
    }

    async fn playlist_tracks(
        &self,
        playlist: &dto::Playlist,
    ) -> Result<Vec<dto::TrackShort>, RemoteError> {
        let owner = match &playlist.owner {
            Some(owner) => owner.uid,
            None => self.uid()?,
        };
        let path = format!("/users/{}/playlists/{}", owner, playlist.kind);
        let full: dto::Playlist = self.get(&path).await?;
        Ok(full.tracks)
    }

    async fn cover_session(&self) -> Result<Box<dyn CoverSession>, RemoteError> {
        Ok(Box::new(HttpCoverSession::new()?))
    }
}

/// Cover downloads over a dedicated connection pool.
///
/// Image hosts are public, so the session carries no credentials.
struct HttpCoverSession {
    http_client: reqwest::Client,
}

impl HttpCoverSession {
    fn new() -> Result<Self, RemoteError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl CoverSession for HttpCoverSession {
    async fn download(&self, uri: &str, size: &str) -> Result<Vec<u8>, RemoteError> {
        let url = cover_url(uri, size);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Network(format!(
                "HTTP {} for {}",
                status, url
            )));
        }

        Ok(response
            .bytes()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?
            .to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = YandexClient::new("token").unwrap();
        assert_eq!(client.base_url, "https://api.music.yandex.net");
        assert!(client.uid.is_none());
    }

    #[test]
    fn test_invalid_token_rejected() {
        assert!(YandexClient::new("bad\ntoken").is_err());
    }

    #[tokio::test]
    async fn test_list_before_init_fails() {
        let client = YandexClient::with_base_url("token", "http://127.0.0.1:9").unwrap();
        assert!(matches!(
            client.liked_tracks().await,
            Err(RemoteError::NotInitialized)
        ));
    }
}
