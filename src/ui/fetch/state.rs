use crate::ui::mvi::ViewState;

/// What a view renders for one remote resource.
///
/// Loading, loaded and failed are separate variants, so a state can never
/// carry stale data while loading or an error next to data.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState<T> {
    /// Nothing requested yet, or explicitly cleared.
    Idle,
    Loading,
    Loaded(T),
    /// Human-readable failure message.
    Failed(String),
}

/// Discriminant of [`UiState`] without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl<T> Default for UiState<T> {
    fn default() -> Self {
        UiState::Idle
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> ViewState for UiState<T> {}

impl<T> UiState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            UiState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            UiState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, UiState::Idle)
    }

    pub fn phase(&self) -> LoadPhase {
        match self {
            UiState::Idle => LoadPhase::Idle,
            UiState::Loading => LoadPhase::Loading,
            UiState::Loaded(_) => LoadPhase::Loaded,
            UiState::Failed(_) => LoadPhase::Failed,
        }
    }
}
