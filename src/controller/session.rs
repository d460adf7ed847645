//! The controllers of one app session over a shared catalog API.

use std::sync::Arc;

use super::detail::DetailController;
use super::genres::GenreController;
use super::list::ListController;
use super::source::{AnimeSource, CharacterSource};
use crate::api::{ApiError, CatalogApi, JikanClient};
use crate::config::Config;

pub type AnimeListController = ListController<AnimeSource>;
pub type AnimeDetailController = DetailController<AnimeSource>;
pub type CharacterListController = ListController<CharacterSource>;
pub type CharacterDetailController = DetailController<CharacterSource>;

/// Anime list, anime detail, character list, character detail and genre
/// controllers sharing one [`CatalogApi`].
///
/// Each controller owns its own state; a failure in one never shows up in
/// another.
pub struct CatalogSession {
    anime_list: AnimeListController,
    anime_detail: AnimeDetailController,
    character_list: CharacterListController,
    character_detail: CharacterDetailController,
    genres: GenreController,
}

impl CatalogSession {
    /// Build every controller on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn new(api: Arc<dyn CatalogApi>, config: &Config) -> Self {
        let policy = config.controller.sequencing;
        let anime = AnimeSource::new(Arc::clone(&api));
        let characters = CharacterSource::new(Arc::clone(&api));

        Self {
            anime_list: ListController::new(anime.clone(), policy),
            anime_detail: DetailController::new(anime, policy),
            character_list: ListController::new(characters.clone(), policy),
            character_detail: DetailController::new(characters, policy),
            genres: GenreController::new(api, policy),
        }
    }

    /// Build a session talking to the configured Jikan endpoint.
    pub fn connect(config: &Config) -> Result<Self, ApiError> {
        let client = JikanClient::new(&config.api)?;
        tracing::info!(base_url = %config.api.base_url, "Catalog session created");
        Ok(Self::new(Arc::new(client), config))
    }

    pub fn anime_list(&self) -> &AnimeListController {
        &self.anime_list
    }

    pub fn anime_detail(&self) -> &AnimeDetailController {
        &self.anime_detail
    }

    pub fn character_list(&self) -> &CharacterListController {
        &self.character_list
    }

    pub fn character_detail(&self) -> &CharacterDetailController {
        &self.character_detail
    }

    pub fn genres(&self) -> &GenreController {
        &self.genres
    }

    /// Close every controller; requests in flight are abandoned.
    pub fn close(&self) {
        self.anime_list.close();
        self.anime_detail.close();
        self.character_list.close();
        self.character_detail.close();
        self.genres.close();
    }
}
