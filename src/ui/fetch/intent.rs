use crate::ui::mvi::Intent;

/// Lifecycle events of a single fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchIntent<T> {
    /// A request was issued. Any previous data or error is discarded.
    Started,
    Succeeded(T),
    Failed(String),
    /// The view was torn down; return to idle.
    Cleared,
}

impl<T: Send + 'static> Intent for FetchIntent<T> {}
