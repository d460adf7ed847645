use std::sync::Arc;

use tokio::runtime::Handle;

use super::runner::RequestRunner;
use crate::api::{CatalogApi, Genre};
use crate::config::SequencingPolicy;
use crate::ui::{Observable, UiState};

/// Loads the genre list that feeds the genre filter menu.
pub struct GenreController {
    api: Arc<dyn CatalogApi>,
    runner: RequestRunner<Vec<Genre>>,
}

impl GenreController {
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn new(api: Arc<dyn CatalogApi>, policy: SequencingPolicy) -> Self {
        Self::with_runtime(api, policy, Handle::current())
    }

    pub fn with_runtime(api: Arc<dyn CatalogApi>, policy: SequencingPolicy, runtime: Handle) -> Self {
        Self {
            api,
            runner: RequestRunner::new("genres", policy, runtime),
        }
    }

    pub fn state(&self) -> &Observable<UiState<Vec<Genre>>> {
        self.runner.state()
    }

    pub fn fetch_genres(&self) {
        let api = Arc::clone(&self.api);
        self.runner
            .launch("fetch_genres", async move { api.anime_genres().await });
    }

    pub fn close(&self) {
        self.runner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.runner.is_closed()
    }
}
