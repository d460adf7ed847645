use crate::ui::fetch::FetchIntent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent<E> {
    Fetch(FetchIntent<Vec<E>>),
    /// Reorder the loaded items by display name. Never touches the network.
    Sort { ascending: bool },
}

impl<E: Send + 'static> Intent for ListIntent<E> {}
