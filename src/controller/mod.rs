//! State controllers mediating between view intents and the catalog API.
//!
//! Every controller owns exactly one observable [`crate::ui::UiState`] and is
//! its only writer. A trigger writes the loading state synchronously and
//! issues at most one request; the completion is reduced into the state on
//! the runtime thread that finished it.

mod detail;
mod genres;
mod list;
mod runner;
mod scope;
mod sequencer;
mod session;
mod source;

pub use detail::DetailController;
pub use genres::GenreController;
pub use list::ListController;
pub use session::{
    AnimeDetailController, AnimeListController, CatalogSession, CharacterDetailController,
    CharacterListController,
};
pub use source::{AnimeSource, CharacterSource, DetailSource, ListSource};
