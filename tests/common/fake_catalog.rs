//! In-memory [`CatalogApi`] answering immediately from canned data.

#![allow(dead_code)]

use anidex::api::{Anime, ApiError, CatalogApi, Character, Genre};
use async_trait::async_trait;
use parking_lot::Mutex;

#[derive(Default)]
pub struct FakeCatalog {
    pub anime: Vec<Anime>,
    pub characters: Vec<Character>,
    pub genres: Vec<Genre>,
    /// When set, every call fails with this status.
    pub fail_with: Option<u16>,
    calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new(anime: Vec<Anime>, characters: Vec<Character>, genres: Vec<Genre>) -> Self {
        Self {
            anime,
            characters,
            genres,
            fail_with: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }

    /// Names of the API methods called so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().push(call);
        match self.fail_with {
            Some(status) => Err(ApiError::Status {
                status,
                message: "Service Unavailable".to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        message: "Resource does not exist".to_string(),
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn top_anime(&self) -> Result<Vec<Anime>, ApiError> {
        self.record("top_anime".to_string())?;
        Ok(self.anime.clone())
    }

    async fn anime_by_id(&self, id: i64) -> Result<Anime, ApiError> {
        self.record(format!("anime_by_id:{id}"))?;
        self.anime
            .iter()
            .find(|a| a.mal_id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn search_anime(&self, title: &str) -> Result<Vec<Anime>, ApiError> {
        self.record(format!("search_anime:{title}"))?;
        Ok(self
            .anime
            .iter()
            .filter(|a| a.title.contains(title))
            .cloned()
            .collect())
    }

    async fn anime_by_genre(&self, genre_id: i64) -> Result<Vec<Anime>, ApiError> {
        self.record(format!("anime_by_genre:{genre_id}"))?;
        Ok(self
            .anime
            .iter()
            .filter(|a| a.genres.iter().any(|g| g.id == genre_id))
            .cloned()
            .collect())
    }

    async fn top_characters(&self) -> Result<Vec<Character>, ApiError> {
        self.record("top_characters".to_string())?;
        Ok(self.characters.clone())
    }

    async fn character_by_id(&self, id: i64) -> Result<Character, ApiError> {
        self.record(format!("character_by_id:{id}"))?;
        self.characters
            .iter()
            .find(|c| c.mal_id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn search_characters(&self, name: &str) -> Result<Vec<Character>, ApiError> {
        self.record(format!("search_characters:{name}"))?;
        Ok(self
            .characters
            .iter()
            .filter(|c| c.name.contains(name))
            .cloned()
            .collect())
    }

    async fn anime_genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.record("anime_genres".to_string())?;
        Ok(self.genres.clone())
    }
}
