//! View-facing state: MVI primitives, the fetch state container and the
//! observable value views subscribe to.

pub mod fetch;
pub mod list;
pub mod mvi;
mod observable;

pub use fetch::{FetchIntent, FetchReducer, LoadPhase, UiState};
pub use list::{ListIntent, ListReducer};
pub use observable::{Observable, Subscription};
