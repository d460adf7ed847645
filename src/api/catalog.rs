//! The catalog capability consumed by controllers.

use async_trait::async_trait;

use super::error::ApiError;
use super::model::{Anime, Character, Genre};

/// Read-only access to the remote anime/character catalog.
///
/// Every list call returns a single page (page 1 with the configured limit
/// for the top lists). Implementations must be cheap to share behind an
/// `Arc`: one instance backs every controller of a session.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Top-ranked anime.
    async fn top_anime(&self) -> Result<Vec<Anime>, ApiError>;

    /// A single anime with its extended detail fields.
    async fn anime_by_id(&self, id: i64) -> Result<Anime, ApiError>;

    /// Anime whose title matches `title`.
    async fn search_anime(&self, title: &str) -> Result<Vec<Anime>, ApiError>;

    /// Anime tagged with the given genre.
    async fn anime_by_genre(&self, genre_id: i64) -> Result<Vec<Anime>, ApiError>;

    /// Top-ranked characters.
    async fn top_characters(&self) -> Result<Vec<Character>, ApiError>;

    /// A single character with its extended detail fields.
    async fn character_by_id(&self, id: i64) -> Result<Character, ApiError>;

    /// Characters whose name matches `name`.
    async fn search_characters(&self, name: &str) -> Result<Vec<Character>, ApiError>;

    /// All anime genres, used to populate the genre filter.
    async fn anime_genres(&self) -> Result<Vec<Genre>, ApiError>;
}
