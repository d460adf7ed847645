//! HTTP implementation of [`CatalogApi`] for the Jikan v4 REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::time::timeout;

use super::catalog::CatalogApi;
use super::error::ApiError;
use super::model::{Anime, Character, EntityKind, Genre};
use crate::config::ApiConfig;

/// Every Jikan payload is wrapped as `{"data": ...}`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub struct JikanClient {
    client: Client,
    base_url: String,
    page: u32,
    limit: u32,
    request_timeout: Option<Duration>,
}

impl JikanClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page: config.page,
            limit: config.limit,
            request_timeout: config
                .request_timeout_seconds
                .map(|secs| Duration::from_secs(u64::from(secs))),
        })
    }

    async fn top<T: DeserializeOwned>(&self, kind: EntityKind) -> Result<Vec<T>, ApiError> {
        let path = format!("top/{}", kind.path_segment());
        let page = self.page.to_string();
        let limit = self.limit.to_string();
        self.get(&path, &[("page", page.as_str()), ("limit", limit.as_str())])
            .await
    }

    async fn by_id<T: DeserializeOwned>(&self, kind: EntityKind, id: i64) -> Result<T, ApiError> {
        let path = format!("{}/{}", kind.path_segment(), id);
        self.get(&path, &[]).await
    }

    async fn search<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
        text: &str,
    ) -> Result<Vec<T>, ApiError> {
        self.get(kind.path_segment(), &[("q", text)]).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(path, query)?;
        tracing::debug!(endpoint = %path, url = %url, "Catalog request");

        match self.request_timeout {
            Some(limit) => timeout(limit, self.fetch(path, url))
                .await
                .map_err(|_| ApiError::Timeout {
                    endpoint: path.to_string(),
                    seconds: limit.as_secs(),
                })?,
            None => self.fetch(path, url).await,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, url: Url) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: path.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: path.to_string(),
                source,
            })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
                endpoint: path.to_string(),
                source,
            })?;
        Ok(envelope.data)
    }

    fn endpoint_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().copied());
        }
        Ok(url)
    }
}

/// Picks the most descriptive message out of an error body.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    parsed
        .message
        .or(parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}

#[async_trait]
impl CatalogApi for JikanClient {
    async fn top_anime(&self) -> Result<Vec<Anime>, ApiError> {
        self.top(EntityKind::Anime).await
    }

    async fn anime_by_id(&self, id: i64) -> Result<Anime, ApiError> {
        self.by_id(EntityKind::Anime, id).await
    }

    async fn search_anime(&self, title: &str) -> Result<Vec<Anime>, ApiError> {
        self.search(EntityKind::Anime, title).await
    }

    async fn anime_by_genre(&self, genre_id: i64) -> Result<Vec<Anime>, ApiError> {
        let genre = genre_id.to_string();
        self.get(EntityKind::Anime.path_segment(), &[("genres", genre.as_str())])
            .await
    }

    async fn top_characters(&self) -> Result<Vec<Character>, ApiError> {
        self.top(EntityKind::Character).await
    }

    async fn character_by_id(&self, id: i64) -> Result<Character, ApiError> {
        self.by_id(EntityKind::Character, id).await
    }

    async fn search_characters(&self, name: &str) -> Result<Vec<Character>, ApiError> {
        self.search(EntityKind::Character, name).await
    }

    async fn anime_genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.get("genres/anime", &[]).await
    }
}
