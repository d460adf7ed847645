//! Single-entity detail controller.

use std::sync::Arc;

use tokio::runtime::Handle;

use super::runner::RequestRunner;
use super::source::DetailSource;
use crate::api::{CatalogEntity, EntityKind};
use crate::config::SequencingPolicy;
use crate::ui::{Observable, UiState};

/// Drives a detail view keyed by entity id.
///
/// The view calls [`DetailController::fetch_detail`] every time it is
/// entered and [`DetailController::clear`] when it is torn down, so the next
/// detail screen always starts from idle.
pub struct DetailController<S: DetailSource> {
    source: Arc<S>,
    runner: RequestRunner<S::Item>,
}

impl<S: DetailSource> DetailController<S> {
    /// Create a controller on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime; use
    /// [`DetailController::with_runtime`] from other threads.
    pub fn new(source: S, policy: SequencingPolicy) -> Self {
        Self::with_runtime(source, policy, Handle::current())
    }

    pub fn with_runtime(source: S, policy: SequencingPolicy, runtime: Handle) -> Self {
        let label = match <S::Item as CatalogEntity>::KIND {
            EntityKind::Anime => "anime_detail",
            EntityKind::Character => "character_detail",
        };
        Self {
            source: Arc::new(source),
            runner: RequestRunner::new(label, policy, runtime),
        }
    }

    pub fn state(&self) -> &Observable<UiState<S::Item>> {
        self.runner.state()
    }

    pub fn sequencing(&self) -> SequencingPolicy {
        self.runner.policy()
    }

    /// Load the entity with `id`. Re-fetches even if it is already shown.
    pub fn fetch_detail(&self, id: i64) {
        let source = Arc::clone(&self.source);
        self.runner
            .launch("fetch_detail", async move { source.fetch_by_id(id).await });
    }

    /// Return to idle. A fetch still in flight will not write its result.
    pub fn clear(&self) {
        self.runner.reset();
    }

    pub fn close(&self) {
        self.runner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.runner.is_closed()
    }
}
