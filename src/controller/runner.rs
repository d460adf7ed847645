//! Request plumbing shared by every controller.
//!
//! A runner owns one `UiState<T>`, the lifetime scope of the controller and
//! the sequencing policy. Triggers go through [`RequestRunner::launch`]:
//! the loading state is written synchronously, the request runs on the
//! Tokio runtime, and its completion is reduced into the state unless the
//! scope was closed or the sequencer rejects it.

use std::future::Future;

use tokio::runtime::Handle;

use super::scope::ControllerScope;
use super::sequencer::RequestSequencer;
use crate::api::ApiError;
use crate::config::SequencingPolicy;
use crate::ui::mvi::Reducer;
use crate::ui::{FetchIntent, FetchReducer, Observable, UiState};

pub(crate) struct RequestRunner<T> {
    label: &'static str,
    state: Observable<UiState<T>>,
    scope: ControllerScope,
    sequencer: RequestSequencer,
    runtime: Handle,
}

impl<T> RequestRunner<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub(crate) fn new(label: &'static str, policy: SequencingPolicy, runtime: Handle) -> Self {
        Self {
            label,
            state: Observable::new(UiState::Idle),
            scope: ControllerScope::new(),
            sequencer: RequestSequencer::new(policy),
            runtime,
        }
    }

    pub(crate) fn state(&self) -> &Observable<UiState<T>> {
        &self.state
    }

    pub(crate) fn policy(&self) -> SequencingPolicy {
        self.sequencer.policy()
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.scope.is_closed()
    }

    pub(crate) fn launch<F>(&self, operation: &'static str, request: F)
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        if self.scope.is_closed() {
            tracing::debug!(controller = self.label, operation, "Ignoring request on closed controller");
            return;
        }

        let ticket = self.sequencer.issue();
        self.state
            .update(|current| FetchReducer::<T>::reduce(current, FetchIntent::Started));
        tracing::debug!(
            controller = self.label,
            operation,
            request = ticket.seq(),
            "Request issued"
        );

        let label = self.label;
        let handle = self.scope.handle();
        let sequencer = self.sequencer.clone();
        let state = self.state.clone();

        self.runtime.spawn(async move {
            let outcome = tokio::select! {
                outcome = request => outcome,
                _ = handle.closed() => {
                    tracing::debug!(controller = label, operation, request = ticket.seq(), "Request abandoned, controller closed");
                    return;
                }
            };

            let intent = match outcome {
                Ok(data) => FetchIntent::Succeeded(data),
                Err(err) => {
                    tracing::warn!(
                        controller = label,
                        operation,
                        request = ticket.seq(),
                        kind = err.kind(),
                        error = %err,
                        "Request failed"
                    );
                    FetchIntent::Failed(err.to_string())
                }
            };

            let mut applied = false;
            state.update(|current| {
                if handle.is_closed() || !sequencer.accepts(ticket) {
                    return current;
                }
                applied = true;
                FetchReducer::<T>::reduce(current, intent)
            });

            if !applied {
                tracing::debug!(
                    controller = label,
                    operation,
                    request = ticket.seq(),
                    "Completion dropped"
                );
            }
        });
    }

    /// Back to idle; completions of requests already in flight are dropped.
    pub(crate) fn reset(&self) {
        self.sequencer.invalidate();
        self.state
            .update(|current| FetchReducer::<T>::reduce(current, FetchIntent::Cleared));
    }

    pub(crate) fn close(&self) {
        if !self.scope.is_closed() {
            tracing::debug!(controller = self.label, "Controller closed");
        }
        self.scope.close();
    }
}

impl<T> Drop for RequestRunner<T> {
    fn drop(&mut self) {
        self.scope.close();
    }
}
