//! Client-side state orchestration for browsing an anime/character catalog.
//!
//! Controllers mediate between view intents (search text, genre filter,
//! sort order, detail navigation) and a remote [`api::CatalogApi`], exposing
//! an observable [`ui::UiState`] that the view renders.

pub mod api;
pub mod config;
pub mod controller;
pub mod logging;
pub mod ui;
