//! Per-entity strategies plugged into the generic controllers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{Anime, ApiError, CatalogApi, CatalogEntity, Character};

/// Where a list controller gets its items from.
///
/// One implementation per entity kind; the sort key comes from
/// [`CatalogEntity::display_name`].
#[async_trait]
pub trait ListSource: Send + Sync + 'static {
    type Item: CatalogEntity;

    /// Unfiltered top list.
    async fn fetch_top(&self) -> Result<Vec<Self::Item>, ApiError>;

    /// Items matching a non-empty free-text query.
    async fn search(&self, query: &str) -> Result<Vec<Self::Item>, ApiError>;

    /// Items tagged with `genre_id`. Sources without genre support keep the
    /// default, which fails without touching the network.
    async fn fetch_by_genre(&self, _genre_id: i64) -> Result<Vec<Self::Item>, ApiError> {
        Err(ApiError::Unsupported {
            operation: "filter by genre",
        })
    }
}

/// Where a detail controller gets a single entity from.
#[async_trait]
pub trait DetailSource: Send + Sync + 'static {
    type Item: CatalogEntity;

    async fn fetch_by_id(&self, id: i64) -> Result<Self::Item, ApiError>;
}

/// Anime list and detail backed by a [`CatalogApi`].
#[derive(Clone)]
pub struct AnimeSource {
    api: Arc<dyn CatalogApi>,
}

impl AnimeSource {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListSource for AnimeSource {
    type Item = Anime;

    async fn fetch_top(&self) -> Result<Vec<Anime>, ApiError> {
        self.api.top_anime().await
    }

    async fn search(&self, query: &str) -> Result<Vec<Anime>, ApiError> {
        self.api.search_anime(query).await
    }

    async fn fetch_by_genre(&self, genre_id: i64) -> Result<Vec<Anime>, ApiError> {
        self.api.anime_by_genre(genre_id).await
    }
}

#[async_trait]
impl DetailSource for AnimeSource {
    type Item = Anime;

    async fn fetch_by_id(&self, id: i64) -> Result<Anime, ApiError> {
        self.api.anime_by_id(id).await
    }
}

/// Character list and detail backed by a [`CatalogApi`]. No genre filter.
#[derive(Clone)]
pub struct CharacterSource {
    api: Arc<dyn CatalogApi>,
}

impl CharacterSource {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListSource for CharacterSource {
    type Item = Character;

    async fn fetch_top(&self) -> Result<Vec<Character>, ApiError> {
        self.api.top_characters().await
    }

    async fn search(&self, query: &str) -> Result<Vec<Character>, ApiError> {
        self.api.search_characters(query).await
    }
}

#[async_trait]
impl DetailSource for CharacterSource {
    type Item = Character;

    async fn fetch_by_id(&self, id: i64) -> Result<Character, ApiError> {
        self.api.character_by_id(id).await
    }
}
