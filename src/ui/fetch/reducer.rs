use std::marker::PhantomData;

use crate::ui::fetch::intent::FetchIntent;
use crate::ui::fetch::state::UiState;
use crate::ui::mvi::Reducer;

pub struct FetchReducer<T>(PhantomData<fn() -> T>);

impl<T: Clone + PartialEq + Send + Sync + 'static> Reducer for FetchReducer<T> {
    type State = UiState<T>;
    type Intent = FetchIntent<T>;

    // Loading is re-enterable from every state; the previous state never
    // leaks into the next one.
    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Started => UiState::Loading,
            FetchIntent::Succeeded(data) => UiState::Loaded(data),
            FetchIntent::Failed(message) => UiState::Failed(message),
            FetchIntent::Cleared => UiState::Idle,
        }
    }
}
