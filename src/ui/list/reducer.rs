use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::api::CatalogEntity;
use crate::ui::fetch::{FetchReducer, UiState};
use crate::ui::list::intent::ListIntent;
use crate::ui::mvi::Reducer;

pub struct ListReducer<E>(PhantomData<fn() -> E>);

impl<E: CatalogEntity> Reducer for ListReducer<E> {
    type State = UiState<Vec<E>>;
    type Intent = ListIntent<E>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Fetch(fetch) => FetchReducer::<Vec<E>>::reduce(state, fetch),
            ListIntent::Sort { ascending } => match state {
                UiState::Loaded(mut items) => {
                    sort_by_display_name(&mut items, ascending);
                    UiState::Loaded(items)
                }
                // Nothing loaded: sorting is a no-op.
                other => other,
            },
        }
    }
}

/// Stable, case-sensitive ordering by display name.
///
/// Names compare by UTF-16 code unit, so characters outside the Basic
/// Multilingual Plane sort before U+E000..=U+FFFF.
pub fn sort_by_display_name<E: CatalogEntity>(items: &mut [E], ascending: bool) {
    if ascending {
        items.sort_by(|a, b| utf16_cmp(a.display_name(), b.display_name()));
    } else {
        items.sort_by(|a, b| utf16_cmp(b.display_name(), a.display_name()));
    }
}

fn utf16_cmp(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}
