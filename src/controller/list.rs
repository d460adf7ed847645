//! Searchable, filterable, sortable collection controller.

use std::sync::Arc;

use tokio::runtime::Handle;

use super::runner::RequestRunner;
use super::source::ListSource;
use crate::api::{CatalogEntity, EntityKind, Genre};
use crate::config::SequencingPolicy;
use crate::ui::mvi::Reducer;
use crate::ui::{ListIntent, ListReducer, Observable, UiState};

/// Drives a collection view for one entity kind.
///
/// Search and genre filter are alternative triggers: each issues its own
/// request and the most recent completion decides what is shown (see
/// [`SequencingPolicy`]). Neither composes with the other. Sorting reorders
/// the loaded items locally and is not remembered for the next fetch.
///
/// Requests run on the Tokio runtime captured at construction. Dropping the
/// controller (or calling [`ListController::close`]) abandons requests in
/// flight without writing state.
pub struct ListController<S: ListSource> {
    source: Arc<S>,
    runner: RequestRunner<Vec<S::Item>>,
    query: Observable<String>,
    selected_genre: Observable<Option<Genre>>,
}

impl<S: ListSource> ListController<S> {
    /// Create a controller on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime; use
    /// [`ListController::with_runtime`] from other threads.
    pub fn new(source: S, policy: SequencingPolicy) -> Self {
        Self::with_runtime(source, policy, Handle::current())
    }

    pub fn with_runtime(source: S, policy: SequencingPolicy, runtime: Handle) -> Self {
        let label = match <S::Item as CatalogEntity>::KIND {
            EntityKind::Anime => "anime_list",
            EntityKind::Character => "character_list",
        };
        Self {
            source: Arc::new(source),
            runner: RequestRunner::new(label, policy, runtime),
            query: Observable::new(String::new()),
            selected_genre: Observable::new(None),
        }
    }

    pub fn state(&self) -> &Observable<UiState<Vec<S::Item>>> {
        self.runner.state()
    }

    /// Current search text, empty when no search is active.
    pub fn query(&self) -> &Observable<String> {
        &self.query
    }

    /// Current genre filter, `None` when unfiltered.
    pub fn selected_genre(&self) -> &Observable<Option<Genre>> {
        &self.selected_genre
    }

    pub fn sequencing(&self) -> SequencingPolicy {
        self.runner.policy()
    }

    /// Load the unfiltered top list.
    pub fn fetch_top(&self) {
        let source = Arc::clone(&self.source);
        self.runner
            .launch("fetch_top", async move { source.fetch_top().await });
    }

    /// Search by title/name. An empty query falls back to the top list.
    pub fn search(&self, query: &str) {
        self.query.set(query.to_string());
        if query.is_empty() {
            self.fetch_top();
            return;
        }

        let source = Arc::clone(&self.source);
        let query = query.to_string();
        self.runner
            .launch("search", async move { source.search(&query).await });
    }

    /// Filter by genre. `None` falls back to the top list.
    pub fn filter_by_genre(&self, genre: Option<Genre>) {
        self.selected_genre.set(genre.clone());
        let Some(genre) = genre else {
            self.fetch_top();
            return;
        };

        tracing::debug!(genre_id = genre.id, genre = %genre.name, "Filtering by genre");
        let source = Arc::clone(&self.source);
        self.runner.launch("filter_by_genre", async move {
            source.fetch_by_genre(genre.id).await
        });
    }

    /// Reorder loaded items by display name. No-op unless loaded.
    pub fn sort(&self, ascending: bool) {
        self.runner.state().update(|current| {
            ListReducer::<S::Item>::reduce(current, ListIntent::Sort { ascending })
        });
    }

    /// Abandon in-flight requests; later triggers are ignored.
    pub fn close(&self) {
        self.runner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.runner.is_closed()
    }
}
